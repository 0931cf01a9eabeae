//! 統合テスト用の最小ホスト
//!
//! MinimalPlugins + OverseerPlugin のヘッドレス App を組み、
//! メッセージ経由でエンジンを駆動する。

use bevy::prelude::*;

use soul_overseer::entities::soul::{SkillSet, SoulBundle, WorkPriorities, WorkerRole};
use soul_overseer::events::RecomputeRequest;
use soul_overseer::systems::work::WorkType;
use soul_overseer::OverseerPlugin;

pub fn build_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(OverseerPlugin);
    app
}

pub fn spawn_soul(app: &mut App, skills: SkillSet, role: WorkerRole) -> Entity {
    app.world_mut()
        .spawn(SoulBundle {
            skills,
            role,
            ..Default::default()
        })
        .id()
}

/// コロニー全体の強制フル再計算を 1 フレームで実行する
pub fn force_full_recompute(app: &mut App) {
    app.world_mut().write_message(RecomputeRequest {
        target: None,
        force: true,
    });
    app.update();
}

pub fn level(app: &App, entity: Entity, work: WorkType) -> u8 {
    app.world()
        .get::<WorkPriorities>(entity)
        .map(|p| p.get(work))
        .unwrap_or(0)
}

pub fn assigned_count(app: &App, entity: Entity) -> usize {
    app.world()
        .get::<WorkPriorities>(entity)
        .map(|p| p.assigned_count())
        .unwrap_or(0)
}

pub fn table_snapshot(app: &App, entity: Entity) -> WorkPriorities {
    app.world()
        .get::<WorkPriorities>(entity)
        .cloned()
        .unwrap_or_default()
}
