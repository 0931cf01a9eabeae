//! ヘッドレスデモ
//!
//! ウィンドウなしで小さなコロニーを組み、フル再計算の結果を
//! ログに出す。エンジンの挙動を目視確認するための最小ホスト。

use bevy::prelude::*;

use soul_overseer::entities::soul::{
    DamnedSoul, Passion, SkillSet, SoulBundle, WorkPriorities, WorkerRole,
};
use soul_overseer::events::RecomputeRequest;
use soul_overseer::systems::overseer::oracle::{DemandOracle, FixedDemand};
use soul_overseer::systems::work::{SkillDomain, WorkType};
use soul_overseer::OverseerPlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(bevy::log::LogPlugin::default())
        .add_plugins(OverseerPlugin);

    // デモ用の需要: 建築ラッシュ中という想定
    app.insert_resource(DemandOracle::new(
        FixedDemand::default()
            .with_urgency(WorkType::Build, 4.0)
            .with_active(WorkType::Build),
    ));

    let world = app.world_mut();

    world.spawn((
        Name::new("Asmoday"),
        SoulBundle {
            skills: SkillSet::default()
                .with(SkillDomain::Mining, 14, Passion::Major)
                .with(SkillDomain::Construction, 6, Passion::None),
            ..default()
        },
    ));
    world.spawn((
        Name::new("Belial"),
        SoulBundle {
            skills: SkillSet::default()
                .with(SkillDomain::Cooking, 11, Passion::Minor)
                .with(SkillDomain::Medicine, 7, Passion::None),
            ..default()
        },
    ));
    world.spawn((
        Name::new("Caim"),
        SoulBundle {
            skills: SkillSet::default().with(SkillDomain::Construction, 12, Passion::Major),
            ..default()
        },
    ));
    world.spawn((
        Name::new("Dantalion"),
        SoulBundle {
            skills: SkillSet::default().with(SkillDomain::Plants, 9, Passion::Minor),
            role: WorkerRole::Composite(soul_overseer::entities::soul::CompositeRole::Medic),
            ..default()
        },
    ));
    // 手動管理の魂: エンジンは一切触れない
    let mut manual_table = WorkPriorities::default();
    manual_table.set(WorkType::Research, 1);
    world.spawn((
        Name::new("Eligos"),
        SoulBundle {
            role: WorkerRole::Manual,
            priorities: manual_table,
            ..default()
        },
    ));

    world.write_message(RecomputeRequest {
        target: None,
        force: true,
    });

    for _ in 0..3 {
        app.update();
    }

    let mut q_souls = app
        .world_mut()
        .query::<(&Name, &DamnedSoul, &WorkPriorities)>();
    for (name, soul, priorities) in q_souls.iter(app.world()) {
        let mut entries: Vec<(WorkType, u8)> = priorities.iter().collect();
        entries.sort_by_key(|(work, level)| (*level, work.label()));
        let summary: Vec<String> = entries
            .iter()
            .map(|(work, level)| format!("{}={}", work, level))
            .collect();
        info!(
            "{} (auto={}): {}",
            name.as_str(),
            soul.auto_assign,
            summary.join(", ")
        );
    }
}
