//! 配分 1 回ぶんのスナップショットと書き戻し
//!
//! 走行中の読みはすべて不変スナップショット越しに行い、
//! 優先度の書き込みは最後に 1 箇所へ直列化する。走行カウントを
//! 共有したままクエリを跨いで書くことはしない。

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::entities::soul::{
    Activity, DamnedSoul, HealthState, Incapable, SkillSet, WorkPriorities, WorkerRole,
};
use crate::systems::overseer::oracle::DemandOracle;
use crate::systems::overseer::quota::QuotaSetting;
use crate::systems::overseer::range::PriorityRange;
use crate::systems::overseer::settings::OverseerSettings;
use crate::systems::overseer::OverseerError;
use crate::systems::work::{ImportanceClass, WorkType};

/// エンジンが触る魂のクエリ一式
pub(crate) type SoulQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut DamnedSoul,
        &'static SkillSet,
        &'static HealthState,
        &'static WorkerRole,
        &'static Activity,
        Option<&'static Incapable>,
        &'static mut WorkPriorities,
    ),
>;

/// 魂 1 体ぶんの不変キャプチャ
#[derive(Debug, Clone)]
pub(crate) struct WorkerSnapshot {
    pub entity: Entity,
    pub skills: SkillSet,
    pub role: WorkerRole,
    pub auto_assign: bool,
    pub ill: bool,
    pub is_idle: bool,
    pub incapable: HashSet<WorkType>,
    /// 凍結ワーカーのカウント用・手動不可侵検証用の既存テーブル
    pub current: HashMap<WorkType, u8>,
}

impl WorkerSnapshot {
    /// 配分エンジンが割り当てを書き換えてよい魂か。
    /// 疾病中はオーバーライドが優先され、ここでは凍結扱いになる
    pub fn is_managed(&self) -> bool {
        self.auto_assign && self.role != WorkerRole::Manual && !self.ill
    }

    pub fn capable(&self, work: WorkType) -> bool {
        !self.incapable.contains(&work)
    }
}

/// タスク 1 種ぶんのコンテキスト (設定 + 需要オラクルの読み値)
#[derive(Debug, Clone)]
pub(crate) struct TaskContext {
    pub work: WorkType,
    pub importance: ImportanceClass,
    pub quota: QuotaSetting,
    pub urgency: f32,
    pub active: bool,
}

/// クエリから全魂をエンティティ順でキャプチャする
pub(crate) fn capture_workers(q_souls: &SoulQuery) -> Vec<WorkerSnapshot> {
    let mut workers: Vec<WorkerSnapshot> = q_souls
        .iter()
        .map(
            |(entity, soul, skills, health, role, activity, incapable, priorities)| {
                WorkerSnapshot {
                    entity,
                    skills: skills.clone(),
                    role: role.clone(),
                    auto_assign: soul.auto_assign,
                    ill: health.was_ill,
                    is_idle: activity.is_idle,
                    incapable: incapable.map(|i| i.0.clone()).unwrap_or_default(),
                    current: priorities.iter().collect(),
                }
            },
        )
        .collect();
    workers.sort_by_key(|w| w.entity);
    workers
}

/// 配分対象のタスク母集合 (表示中・常時有効でない・Disabled でない)
pub(crate) fn build_task_universe(
    settings: &OverseerSettings,
    oracle: &DemandOracle,
) -> Vec<TaskContext> {
    WorkType::ALL
        .iter()
        .copied()
        .filter(|w| {
            settings.is_visible(*w)
                && !w.is_always_enabled()
                && settings.importance_of(*w) != ImportanceClass::Disabled
        })
        .map(|work| TaskContext {
            work,
            importance: settings.importance_of(work),
            quota: settings.quota_of(work),
            urgency: oracle.urgency(work),
            active: oracle.has_pending_work(work),
        })
        .collect()
}

/// 常時有効タスク (全員に優先度 1 で付与されるもの)
pub(crate) fn always_enabled_tasks(settings: &OverseerSettings) -> Vec<WorkType> {
    WorkType::ALL
        .iter()
        .copied()
        .filter(|w| {
            w.is_always_enabled()
                && settings.is_visible(*w)
                && settings.importance_of(*w) != ImportanceClass::Disabled
        })
        .collect()
}

/// 計算済みテーブルの書き戻し。レンジアダプタを通し、
/// 消えたエンティティへの書き込みは警告してスキップする
pub(crate) fn apply_tables(
    q_souls: &mut SoulQuery,
    tables: &[(Entity, HashMap<WorkType, u8>)],
    range: &PriorityRange,
    stamp_hour: f64,
) {
    for (entity, table) in tables {
        let Ok((_, mut soul, _, _, _, _, _, mut priorities)) = q_souls.get_mut(*entity) else {
            warn!("OVERSEER: {}", OverseerError::MissingWorker(*entity));
            continue;
        };
        priorities.clear();
        for work in WorkType::ALL {
            if let Some(level) = table.get(&work) {
                priorities.set(work, range.map(*level));
            }
        }
        soul.last_recompute_hour = stamp_hour;
    }
}
