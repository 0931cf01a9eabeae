//! アイドル再配分
//!
//! フル再計算とは別の周期で、手持ちの少ない暇な魂に
//! 低優先度の作業を足して遊ばせないためのスキャン。
//! 既存の割り当てには一切触れない。

use bevy::prelude::*;

use crate::constants::*;
use crate::entities::soul::WorkerRole;
use crate::systems::overseer::oracle::DemandOracle;
use crate::systems::overseer::quota::effective_max;
use crate::systems::overseer::range::PriorityRange;
use crate::systems::overseer::scoring::base_score;
use crate::systems::overseer::settings::OverseerSettings;
use crate::systems::overseer::snapshot::{build_task_universe, SoulQuery};
use crate::systems::overseer::OverseerContext;
use crate::systems::work::WorkType;

pub fn idle_redirect_system(
    time: Res<Time>,
    settings: Res<OverseerSettings>,
    oracle: Res<DemandOracle>,
    range: Res<PriorityRange>,
    mut ctx: ResMut<OverseerContext>,
    mut q_souls: SoulQuery,
) {
    ctx.idle_timer.tick(time.delta());
    if !ctx.idle_timer.just_finished() || !settings.auto_assign_enabled {
        return;
    }

    let tasks = build_task_universe(&settings, &oracle);
    let visible_count = settings.visible_task_count();

    // 現在の保持人数 (最大クォータを破らないため)
    let mut held: std::collections::HashMap<WorkType, u32> = std::collections::HashMap::new();
    for (_, _, _, _, _, _, _, priorities) in q_souls.iter() {
        for (work, level) in priorities.iter() {
            if level > 0 {
                *held.entry(work).or_insert(0) += 1;
            }
        }
    }
    let total = q_souls.iter().count();

    let mut redirected = 0usize;
    for (_entity, soul, skills, health, role, activity, incapable, mut priorities) in
        q_souls.iter_mut()
    {
        if !soul.auto_assign
            || *role == WorkerRole::Manual
            || health.was_ill
            || !activity.is_idle
        {
            continue;
        }
        if priorities.assigned_count() >= visible_count / 2 {
            continue;
        }

        let mut candidates: Vec<(WorkType, f32)> = Vec::new();
        for task in &tasks {
            if priorities.get(task.work) > 0 {
                continue;
            }
            if incapable.map(|i| i.0.contains(&task.work)).unwrap_or(false) {
                continue;
            }
            let max = effective_max(&task.quota, total);
            if matches!(max, Some(m) if held.get(&task.work).copied().unwrap_or(0) >= m) {
                continue;
            }
            let mut score = base_score(skills, task.work) * task.importance.ranking_modifier();
            if task.active {
                score *= ACTIVE_DEMAND_IDLE_MULTIPLIER;
            }
            score += task.urgency;
            candidates.push((task.work, score));
        }
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        for (work, _) in candidates.into_iter().take(IDLE_REDIRECT_TASK_COUNT) {
            priorities.set(work, range.map(PRIORITY_IDLE_FILL));
            *held.entry(work).or_insert(0) += 1;
            redirected += 1;
        }
    }

    if redirected > 0 {
        debug!("IDLE: topped up {} assignments", redirected);
    }
}
