//! ダーティセット (再計算待ちキュー)
//!
//! critical / normal の 2 バンド。1 tick の処理数は予算で抑え、
//! 余りは落とさず次 tick へ持ち越す。

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::entities::soul::{DamnedSoul, HealthState, WorkerRole};
use crate::events::{
    HealthChangedEvent, RecomputeRequest, RoleChangedEvent, SkillChangedEvent, WorkerJoinedEvent,
    WorkerLeftEvent,
};
use crate::systems::overseer::health::meets_threshold;
use crate::systems::overseer::settings::OverseerSettings;
use crate::systems::overseer::OverseerContext;

/// 2 バンドの再計算待ち行列。同一エンティティは重複登録しない
#[derive(Debug, Default)]
pub struct DirtyBands {
    critical: VecDeque<Entity>,
    normal: VecDeque<Entity>,
}

impl DirtyBands {
    /// critical へ積む。normal に居た場合は昇格させる
    pub fn push_critical(&mut self, entity: Entity) {
        if self.critical.contains(&entity) {
            return;
        }
        self.normal.retain(|e| *e != entity);
        self.critical.push_back(entity);
    }

    /// normal へ積む。どちらかのバンドに既に居れば何もしない
    pub fn push_normal(&mut self, entity: Entity) {
        if self.critical.contains(&entity) || self.normal.contains(&entity) {
            return;
        }
        self.normal.push_back(entity);
    }

    /// critical を優先して 1 件取り出す
    pub fn pop_next(&mut self) -> Option<Entity> {
        self.critical.pop_front().or_else(|| self.normal.pop_front())
    }

    pub fn remove(&mut self, entity: Entity) {
        self.critical.retain(|e| *e != entity);
        self.normal.retain(|e| *e != entity);
    }

    pub fn len(&self) -> usize {
        self.critical.len() + self.normal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.critical.is_empty() && self.normal.is_empty()
    }

    pub fn clear(&mut self) {
        self.critical.clear();
        self.normal.clear();
    }
}

/// ホストのイベントストリームをダーティバンドへ振り分けるシステム
///
/// - 加入 / ロール変更 → critical
/// - スキル変化 → normal
/// - 健康変化 → 疾病閾値に触れるなら critical、それ以外は normal
/// - 離脱 → 当人をバンドから除去し、残り全員を normal (クォータが動くため)
/// - 明示要求 → force なら即時フル、さもなくば対象を force に応じたバンドへ
pub fn collect_events_system(
    settings: Res<OverseerSettings>,
    mut ctx: ResMut<OverseerContext>,
    mut ev_joined: MessageReader<WorkerJoinedEvent>,
    mut ev_left: MessageReader<WorkerLeftEvent>,
    mut ev_health: MessageReader<HealthChangedEvent>,
    mut ev_skill: MessageReader<SkillChangedEvent>,
    mut ev_role: MessageReader<RoleChangedEvent>,
    mut ev_recompute: MessageReader<RecomputeRequest>,
    q_souls: Query<(Entity, &DamnedSoul, &HealthState, &WorkerRole)>,
) {
    for ev in ev_joined.read() {
        ctx.dirty.push_critical(ev.entity);
    }

    for ev in ev_role.read() {
        ctx.dirty.push_critical(ev.entity);
    }

    for ev in ev_skill.read() {
        ctx.dirty.push_normal(ev.entity);
    }

    for ev in ev_health.read() {
        match q_souls.get(ev.entity) {
            Ok((_, _, health, _)) if meets_threshold(health, settings.illness_threshold) => {
                ctx.dirty.push_critical(ev.entity);
            }
            _ => ctx.dirty.push_normal(ev.entity),
        }
    }

    for ev in ev_left.read() {
        ctx.dirty.remove(ev.entity);
        // 離脱で人数ベースのクォータがずれるため残り全員を見直す
        for (entity, soul, _, role) in q_souls.iter() {
            if entity != ev.entity && soul.auto_assign && *role != WorkerRole::Manual {
                ctx.dirty.push_normal(entity);
            }
        }
    }

    for ev in ev_recompute.read() {
        match ev.target {
            Some(entity) => {
                if ev.force {
                    ctx.dirty.push_critical(entity);
                } else {
                    ctx.dirty.push_normal(entity);
                }
            }
            None => {
                if ev.force {
                    // 強制フルは保留中のダーティをすべて上書きする
                    ctx.full_pending = Some(true);
                } else if ctx.full_pending.is_none() {
                    ctx.full_pending = Some(false);
                }
            }
        }
    }
}
