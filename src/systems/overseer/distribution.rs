//! コロニー全体の多段配分エンジン
//!
//! Pass A: 固定ロールの適用 (先頭をプライマリとして記録)
//! Pass B: Auto ロールへのプライマリ選定
//! Pass C: カバレッジ保証 (未カバータスクを最適者に優先度 2 で追加)
//! Pass D: 副業フィル (コロニー規模に応じた上限つき)
//! Pass E: 最低人数クォータの補充
//!
//! 全パスはスナップショット上で厳密に順番に実行され、反復順は
//! エンティティ順・WorkType 宣言順に固定してあるため、状態が
//! 変わらなければ結果も変わらない。

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::constants::*;
use crate::systems::overseer::quota::{effective_max, effective_min, QuotaLedger};
use crate::systems::overseer::roles::{resolve_role, spread_level, ResolvedRole};
use crate::systems::overseer::scoring::base_score;
use crate::systems::overseer::snapshot::{TaskContext, WorkerSnapshot};
use crate::systems::overseer::settings::OverseerSettings;
use crate::systems::work::{ImportanceClass, WorkType};

/// 配分 1 回ぶんの結果概要。ダッシュボード層が読む
#[derive(Debug, Clone, Default)]
pub struct DistributionReport {
    pub managed: usize,
    pub frozen: usize,
    pub covered: usize,
    /// 実行可能なワーカーが存在せず割り当てられなかったタスク
    pub uncoverable: Vec<WorkType>,
    /// 最低人数に届かなかったタスクと不足数
    pub shortfalls: Vec<(WorkType, u32)>,
}

pub(crate) struct DistributionOutcome {
    /// 管理対象ワーカーぶんの新テーブル。凍結ワーカーは含まれない
    pub tables: Vec<(Entity, HashMap<WorkType, u8>)>,
    pub report: DistributionReport,
}

/// 副業フィル (Pass D) の 1 人あたり上限。コロニーが大きいほど絞る
pub(crate) fn secondary_cap(managed: usize) -> usize {
    match managed {
        0..=1 => usize::MAX,
        2..=3 => SECONDARY_CAP_TINY_COLONY,
        4..=6 => SECONDARY_CAP_SMALL_COLONY,
        7..=10 => SECONDARY_CAP_MID_COLONY,
        _ => SECONDARY_CAP_LARGE_COLONY,
    }
}

/// 単独コロニー用の固定テーブル。配分エンジンは通さない
pub(crate) fn solo_table(
    worker: &WorkerSnapshot,
    settings: &OverseerSettings,
) -> HashMap<WorkType, u8> {
    SOLO_SURVIVAL_TABLE
        .iter()
        .copied()
        .filter(|(work, _)| {
            worker.capable(*work)
                && settings.is_visible(*work)
                && settings.importance_of(*work) != ImportanceClass::Disabled
        })
        .collect()
}

/// 単一ワーカーの再計算 (イベント駆動経路)。
/// ロール解決のみで決まり、コロニー配分のブーストは掛からない。
/// Manual / auto off は `None` (不介入)
pub(crate) fn single_table(
    worker: &WorkerSnapshot,
    colony: &[WorkerSnapshot],
    tasks: &[TaskContext],
    always: &[WorkType],
    top_level: u8,
) -> Option<HashMap<WorkType, u8>> {
    if !worker.is_managed() {
        return None;
    }

    let mut table: HashMap<WorkType, u8> = HashMap::new();
    for work in always {
        if worker.capable(*work) {
            table.insert(*work, PRIORITY_TOP);
        }
    }

    match resolve_role(&worker.role) {
        ResolvedRole::Skip => return None,
        ResolvedRole::Pinned(list) => {
            for (work, level) in list {
                if !worker.capable(work) || !tasks.iter().any(|t| t.work == work) {
                    continue;
                }
                let slot = table.entry(work).or_insert(level);
                *slot = (*slot).min(level);
            }
        }
        ResolvedRole::Auto => {
            // 他ワーカーのプライマリ保持数で同一タスクへの集中を抑える
            let mut best: Option<(WorkType, f32)> = None;
            for task in tasks {
                if !worker.capable(task.work) {
                    continue;
                }
                let holders = colony
                    .iter()
                    .filter(|other| {
                        other.entity != worker.entity
                            && other.current.get(&task.work) == Some(&top_level)
                    })
                    .count() as f32;
                let score = base_score(&worker.skills, task.work)
                    * task.importance.ranking_modifier()
                    / (1.0 + holders * PRIMARY_CONCENTRATION_DAMPING);
                if best.map(|(_, s)| score > s).unwrap_or(true) {
                    best = Some((task.work, score));
                }
            }
            if let Some((work, _)) = best {
                table.insert(work, PRIORITY_TOP);
            }
        }
    }

    Some(table)
}

/// コロニー全体の配分。管理対象が 2 人以上のときに呼ばれる
pub(crate) fn run_distribution(
    workers: &[WorkerSnapshot],
    tasks: &[TaskContext],
    always: &[WorkType],
) -> DistributionOutcome {
    let total = workers.len();
    let managed: Vec<&WorkerSnapshot> = workers.iter().filter(|w| w.is_managed()).collect();
    let frozen: Vec<&WorkerSnapshot> = workers.iter().filter(|w| !w.is_managed()).collect();

    let eff: Vec<(u32, Option<u32>)> = tasks
        .iter()
        .map(|t| (effective_min(&t.quota, total), effective_max(&t.quota, total)))
        .collect();

    let mut report = DistributionReport {
        managed: managed.len(),
        frozen: frozen.len(),
        ..Default::default()
    };

    // 走行カウントとカバレッジは凍結ワーカーの既存割り当てから始める
    let mut ledger = QuotaLedger::default();
    let mut covered: HashSet<WorkType> = HashSet::new();
    for worker in &frozen {
        ledger.seed(worker.current.iter().map(|(w, l)| (*w, *l)));
        for (work, level) in &worker.current {
            if *level > 0 {
                covered.insert(*work);
            }
        }
    }

    let mut tables: Vec<(Entity, HashMap<WorkType, u8>)> = Vec::with_capacity(managed.len());
    let mut primaries: HashMap<Entity, WorkType> = HashMap::new();
    let mut primary_holders: HashMap<WorkType, u32> = HashMap::new();

    // 既存の優先度をすべて破棄し、常時有効タスクを全員に付与する
    for worker in &managed {
        let mut table = HashMap::new();
        for work in always {
            if worker.capable(*work) {
                table.insert(*work, PRIORITY_TOP);
            }
        }
        tables.push((worker.entity, table));
    }

    let task_index = |work: WorkType| tasks.iter().position(|t| t.work == work);

    // --- Pass A: 固定ロール ---
    let mut auto_workers: Vec<usize> = Vec::new();
    for (wi, worker) in managed.iter().enumerate() {
        match resolve_role(&worker.role) {
            ResolvedRole::Auto => auto_workers.push(wi),
            ResolvedRole::Skip => continue,
            ResolvedRole::Pinned(list) => {
                for (work, level) in list {
                    if !worker.capable(work) || task_index(work).is_none() {
                        continue;
                    }
                    let table = &mut tables[wi].1;
                    let newly = !table.contains_key(&work);
                    let slot = table.entry(work).or_insert(level);
                    *slot = (*slot).min(level);
                    if newly {
                        ledger.add(work);
                        if !primaries.contains_key(&worker.entity) {
                            primaries.insert(worker.entity, work);
                            *primary_holders.entry(work).or_insert(0) += 1;
                            covered.insert(work);
                        }
                    }
                }
            }
        }
    }

    // --- Pass B: Auto ロールのプライマリ選定 ---
    for wi in auto_workers {
        let worker = managed[wi];
        let mut best: Option<(WorkType, f32)> = None;
        for (ti, task) in tasks.iter().enumerate() {
            if !worker.capable(task.work) || ledger.at_max(task.work, eff[ti].1) {
                continue;
            }
            let mut score =
                base_score(&worker.skills, task.work) * task.importance.ranking_modifier()
                    + task.urgency;
            if task.active {
                score *= ACTIVE_DEMAND_PRIMARY_MULTIPLIER;
            }
            if !covered.contains(&task.work) {
                score *= UNCOVERED_TASK_MULTIPLIER;
            }
            if ledger.under_min(task.work, eff[ti].0) {
                score *= UNDER_MINIMUM_MULTIPLIER;
            }
            if primary_holders.get(&task.work).copied().unwrap_or(0) > 0 {
                score *= TAKEN_PRIMARY_MULTIPLIER;
            }
            if best.map(|(_, s)| score > s).unwrap_or(true) {
                best = Some((task.work, score));
            }
        }
        if let Some((work, _)) = best {
            tables[wi].1.insert(work, PRIORITY_TOP);
            ledger.add(work);
            primaries.insert(worker.entity, work);
            *primary_holders.entry(work).or_insert(0) += 1;
            covered.insert(work);
        }
    }

    // --- Pass C: カバレッジ保証 ---
    for (ti, task) in tasks.iter().enumerate() {
        if covered.contains(&task.work) {
            continue;
        }
        // 明示的ゼロ人タスクはカバレッジの対象外 (無制限の None と混同しない)
        if eff[ti].1 == Some(0) {
            continue;
        }
        if ledger.at_max(task.work, eff[ti].1) {
            continue;
        }
        let mut best: Option<(usize, f32)> = None;
        for (wi, worker) in managed.iter().enumerate() {
            if !worker.capable(task.work) {
                continue;
            }
            let score = base_score(&worker.skills, task.work);
            if best.map(|(_, s)| score > s).unwrap_or(true) {
                best = Some((wi, score));
            }
        }
        match best {
            Some((wi, _)) => {
                let table = &mut tables[wi].1;
                let slot = table.entry(task.work).or_insert(PRIORITY_COVERAGE);
                *slot = (*slot).min(PRIORITY_COVERAGE);
                ledger.add(task.work);
                covered.insert(task.work);
            }
            None => report.uncoverable.push(task.work),
        }
    }

    // --- Pass D: 副業フィル ---
    let cap = secondary_cap(managed.len());
    for (wi, worker) in managed.iter().enumerate() {
        let mut candidates: Vec<(usize, f32)> = Vec::new();
        for (ti, task) in tasks.iter().enumerate() {
            if !worker.capable(task.work)
                || tables[wi].1.contains_key(&task.work)
                || ledger.at_max(task.work, eff[ti].1)
            {
                continue;
            }
            let mut score =
                base_score(&worker.skills, task.work) * task.importance.ranking_modifier()
                    + task.urgency;
            if task.active {
                score *= ACTIVE_DEMAND_SECONDARY_MULTIPLIER;
            }
            if primary_holders.get(&task.work).copied().unwrap_or(0) > 0 {
                score *= ASSIST_PRIMARY_MULTIPLIER;
            }
            candidates.push((ti, score));
        }
        // 安定ソートなので同点は WorkType 宣言順で決まる
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(cap);

        for class in ImportanceClass::RANKED {
            let group: Vec<usize> = candidates
                .iter()
                .filter(|(ti, _)| tasks[*ti].importance == class)
                .map(|(ti, _)| *ti)
                .collect();
            for (index, ti) in group.iter().enumerate() {
                let level = spread_level(class, index, group.len());
                if level == 0 {
                    continue;
                }
                tables[wi].1.insert(tasks[*ti].work, level);
                ledger.add(tasks[*ti].work);
            }
        }
    }

    // --- Pass E: 最低人数クォータの補充 ---
    for (ti, task) in tasks.iter().enumerate() {
        let min = eff[ti].0;
        if min == 0 {
            continue;
        }
        if !ledger.under_min(task.work, min) {
            continue;
        }
        let mut candidates: Vec<(usize, f32)> = managed
            .iter()
            .enumerate()
            .filter(|(wi, worker)| {
                worker.capable(task.work) && !tables[*wi].1.contains_key(&task.work)
            })
            .map(|(wi, worker)| (wi, base_score(&worker.skills, task.work)))
            .collect();
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        for (wi, _) in candidates {
            if !ledger.under_min(task.work, min) || ledger.at_max(task.work, eff[ti].1) {
                break;
            }
            let worker = managed[wi];
            if primaries.contains_key(&worker.entity) {
                tables[wi].1.insert(task.work, PRIORITY_COVERAGE);
            } else {
                // まだプライマリを持たないワーカーはここで新規プライマリになる
                tables[wi].1.insert(task.work, PRIORITY_TOP);
                primaries.insert(worker.entity, task.work);
                *primary_holders.entry(task.work).or_insert(0) += 1;
            }
            ledger.add(task.work);
            covered.insert(task.work);
        }

        let count = ledger.count(task.work);
        if count < min {
            report.shortfalls.push((task.work, min - count));
        }
    }

    report.covered = covered.len();
    DistributionOutcome { tables, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::soul::{Passion, SkillSet, WorkerRole};
    use crate::systems::overseer::oracle::DemandOracle;
    use crate::systems::overseer::quota::QuotaSetting;
    use crate::systems::overseer::snapshot::build_task_universe;
    use crate::systems::work::SkillDomain;

    fn mint_entities(count: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    fn worker(entity: Entity, skills: SkillSet, role: WorkerRole) -> WorkerSnapshot {
        WorkerSnapshot {
            entity,
            skills,
            role,
            auto_assign: true,
            ill: false,
            is_idle: false,
            incapable: HashSet::new(),
            current: HashMap::new(),
        }
    }

    fn universe(settings: &OverseerSettings) -> Vec<TaskContext> {
        build_task_universe(settings, &DemandOracle::default())
    }

    fn always(settings: &OverseerSettings) -> Vec<WorkType> {
        crate::systems::overseer::snapshot::always_enabled_tasks(settings)
    }

    fn table_of<'a>(
        outcome: &'a DistributionOutcome,
        entity: Entity,
    ) -> &'a HashMap<WorkType, u8> {
        &outcome
            .tables
            .iter()
            .find(|(e, _)| *e == entity)
            .expect("worker missing from outcome")
            .1
    }

    #[test]
    fn disjoint_specialists_get_their_own_primaries() {
        let settings = OverseerSettings::default();
        let ids = mint_entities(3);
        let workers = vec![
            worker(
                ids[0],
                SkillSet::default().with(SkillDomain::Mining, 18, Passion::None),
                WorkerRole::Auto,
            ),
            worker(
                ids[1],
                SkillSet::default().with(SkillDomain::Construction, 18, Passion::None),
                WorkerRole::Auto,
            ),
            worker(
                ids[2],
                SkillSet::default().with(SkillDomain::Cooking, 18, Passion::None),
                WorkerRole::Auto,
            ),
        ];

        let outcome = run_distribution(&workers, &universe(&settings), &always(&settings));

        assert_eq!(table_of(&outcome, ids[0]).get(&WorkType::Mine), Some(&1));
        assert_eq!(table_of(&outcome, ids[1]).get(&WorkType::Build), Some(&1));
        assert_eq!(table_of(&outcome, ids[2]).get(&WorkType::Cook), Some(&1));
        // プライマリの衝突なし: 専門タスクを 1 で持つのは本人だけ
        for (expert, work) in [
            (ids[0], WorkType::Mine),
            (ids[1], WorkType::Build),
            (ids[2], WorkType::Cook),
        ] {
            for id in &ids {
                if *id != expert {
                    assert_ne!(table_of(&outcome, *id).get(&work), Some(&1));
                }
            }
        }
    }

    #[test]
    fn every_capable_task_is_covered() {
        let settings = OverseerSettings::default();
        let ids = mint_entities(4);
        let workers: Vec<WorkerSnapshot> = ids
            .iter()
            .map(|id| worker(*id, SkillSet::default(), WorkerRole::Auto))
            .collect();

        let tasks = universe(&settings);
        let outcome = run_distribution(&workers, &tasks, &always(&settings));

        assert!(outcome.report.uncoverable.is_empty());
        for task in &tasks {
            let holders = outcome
                .tables
                .iter()
                .filter(|(_, table)| table.get(&task.work).copied().unwrap_or(0) > 0)
                .count();
            assert!(holders >= 1, "{} left uncovered", task.work);
        }
    }

    #[test]
    fn quota_min_max_is_hit_exactly() {
        let mut settings = OverseerSettings::default();
        settings.quotas.insert(
            WorkType::Craft,
            QuotaSetting {
                min: 2,
                max: Some(2),
                percentage: false,
            },
        );
        let ids = mint_entities(10);
        let workers: Vec<WorkerSnapshot> = ids
            .iter()
            .map(|id| worker(*id, SkillSet::default(), WorkerRole::Auto))
            .collect();

        let outcome = run_distribution(&workers, &universe(&settings), &always(&settings));

        let holders = outcome
            .tables
            .iter()
            .filter(|(_, table)| table.get(&WorkType::Craft).copied().unwrap_or(0) > 0)
            .count();
        assert_eq!(holders, 2);
        assert!(outcome.report.shortfalls.is_empty());
    }

    #[test]
    fn full_recompute_is_idempotent() {
        let mut settings = OverseerSettings::default();
        settings.quotas.insert(
            WorkType::Grow,
            QuotaSetting {
                min: 1,
                max: Some(3),
                percentage: false,
            },
        );
        let ids = mint_entities(5);
        let workers: Vec<WorkerSnapshot> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                worker(
                    *id,
                    SkillSet::default().with(SkillDomain::Plants, (i * 4) as u8, Passion::Minor),
                    WorkerRole::Auto,
                )
            })
            .collect();

        let tasks = universe(&settings);
        let first = run_distribution(&workers, &tasks, &always(&settings));
        let second = run_distribution(&workers, &tasks, &always(&settings));
        assert_eq!(first.tables, second.tables);
    }

    #[test]
    fn manual_workers_are_never_in_the_outcome() {
        let settings = OverseerSettings::default();
        let ids = mint_entities(3);
        let mut frozen = worker(ids[2], SkillSet::default(), WorkerRole::Manual);
        frozen.current.insert(WorkType::Cook, 1);
        let workers = vec![
            worker(ids[0], SkillSet::default(), WorkerRole::Auto),
            worker(ids[1], SkillSet::default(), WorkerRole::Auto),
            frozen,
        ];

        let outcome = run_distribution(&workers, &universe(&settings), &always(&settings));

        assert!(outcome.tables.iter().all(|(e, _)| *e != ids[2]));
        assert_eq!(outcome.report.frozen, 1);
    }

    #[test]
    fn frozen_assignments_count_against_max() {
        let mut settings = OverseerSettings::default();
        settings.quotas.insert(
            WorkType::Cook,
            QuotaSetting {
                min: 0,
                max: Some(1),
                percentage: false,
            },
        );
        let ids = mint_entities(3);
        let mut frozen = worker(ids[2], SkillSet::default(), WorkerRole::Manual);
        frozen.current.insert(WorkType::Cook, 1);
        let workers = vec![
            worker(
                ids[0],
                SkillSet::default().with(SkillDomain::Cooking, 18, Passion::Major),
                WorkerRole::Auto,
            ),
            worker(ids[1], SkillSet::default(), WorkerRole::Auto),
            frozen,
        ];

        let outcome = run_distribution(&workers, &universe(&settings), &always(&settings));

        // 手動ワーカーが枠を使い切っているので自動側は Cook を持てない
        for id in [ids[0], ids[1]] {
            assert_eq!(table_of(&outcome, id).get(&WorkType::Cook), None);
        }
    }

    #[test]
    fn disabled_importance_excludes_task_entirely() {
        let mut settings = OverseerSettings::default();
        settings
            .importance
            .insert(WorkType::Mine, ImportanceClass::Disabled);
        let ids = mint_entities(3);
        let workers: Vec<WorkerSnapshot> = ids
            .iter()
            .map(|id| {
                worker(
                    *id,
                    SkillSet::default().with(SkillDomain::Mining, 20, Passion::Major),
                    WorkerRole::Auto,
                )
            })
            .collect();

        let outcome = run_distribution(&workers, &universe(&settings), &always(&settings));

        for (_, table) in &outcome.tables {
            assert_eq!(table.get(&WorkType::Mine), None);
        }
    }

    #[test]
    fn explicit_zero_max_is_not_reported_uncoverable() {
        let mut settings = OverseerSettings::default();
        settings.quotas.insert(
            WorkType::Research,
            QuotaSetting {
                min: 0,
                max: Some(0),
                percentage: false,
            },
        );
        let ids = mint_entities(2);
        let workers: Vec<WorkerSnapshot> = ids
            .iter()
            .map(|id| worker(*id, SkillSet::default(), WorkerRole::Auto))
            .collect();

        let outcome = run_distribution(&workers, &universe(&settings), &always(&settings));

        for (_, table) in &outcome.tables {
            assert_eq!(table.get(&WorkType::Research), None);
        }
        assert!(!outcome.report.uncoverable.contains(&WorkType::Research));
    }

    #[test]
    fn incapable_task_is_reported_uncoverable() {
        let settings = OverseerSettings::default();
        let ids = mint_entities(2);
        let workers: Vec<WorkerSnapshot> = ids
            .iter()
            .map(|id| {
                let mut w = worker(*id, SkillSet::default(), WorkerRole::Auto);
                w.incapable.insert(WorkType::Tend);
                w
            })
            .collect();

        let outcome = run_distribution(&workers, &universe(&settings), &always(&settings));

        assert!(outcome.report.uncoverable.contains(&WorkType::Tend));
        for (_, table) in &outcome.tables {
            assert_eq!(table.get(&WorkType::Tend), None);
        }
    }

    #[test]
    fn unmeetable_minimum_reports_shortfall() {
        let mut settings = OverseerSettings::default();
        settings.quotas.insert(
            WorkType::Haul,
            QuotaSetting {
                min: 5,
                max: None,
                percentage: false,
            },
        );
        let ids = mint_entities(2);
        let workers: Vec<WorkerSnapshot> = ids
            .iter()
            .map(|id| worker(*id, SkillSet::default(), WorkerRole::Auto))
            .collect();

        let outcome = run_distribution(&workers, &universe(&settings), &always(&settings));

        let holders = outcome
            .tables
            .iter()
            .filter(|(_, table)| table.get(&WorkType::Haul).copied().unwrap_or(0) > 0)
            .count();
        assert_eq!(holders, 2);
        assert!(outcome
            .report
            .shortfalls
            .iter()
            .any(|(work, missing)| *work == WorkType::Haul && *missing == 3));
    }

    #[test]
    fn pinned_roles_apply_verbatim_and_mark_primary() {
        let settings = OverseerSettings::default();
        let ids = mint_entities(2);
        let workers = vec![
            worker(ids[0], SkillSet::default(), WorkerRole::Single(WorkType::Cook)),
            worker(ids[1], SkillSet::default(), WorkerRole::Auto),
        ];

        let outcome = run_distribution(&workers, &universe(&settings), &always(&settings));

        assert_eq!(table_of(&outcome, ids[0]).get(&WorkType::Cook), Some(&1));
        // ピン留めされたプライマリは Auto 側から避けられる
        assert_ne!(table_of(&outcome, ids[1]).get(&WorkType::Cook), Some(&1));
    }

    #[test]
    fn always_enabled_tasks_reach_everyone_capable() {
        let settings = OverseerSettings::default();
        let ids = mint_entities(3);
        let mut no_fire = worker(ids[2], SkillSet::default(), WorkerRole::Auto);
        no_fire.incapable.insert(WorkType::Firefight);
        let workers = vec![
            worker(ids[0], SkillSet::default(), WorkerRole::Auto),
            worker(ids[1], SkillSet::default(), WorkerRole::Auto),
            no_fire,
        ];

        let outcome = run_distribution(&workers, &universe(&settings), &always(&settings));

        assert_eq!(table_of(&outcome, ids[0]).get(&WorkType::Firefight), Some(&1));
        assert_eq!(table_of(&outcome, ids[1]).get(&WorkType::Firefight), Some(&1));
        assert_eq!(table_of(&outcome, ids[2]).get(&WorkType::Firefight), None);
    }

    #[test]
    fn secondary_cap_shrinks_with_colony_size() {
        assert_eq!(secondary_cap(1), usize::MAX);
        assert_eq!(secondary_cap(3), 12);
        assert_eq!(secondary_cap(6), 9);
        assert_eq!(secondary_cap(10), 7);
        assert_eq!(secondary_cap(24), 5);
    }

    #[test]
    fn solo_table_matches_survival_priorities() {
        let settings = OverseerSettings::default();
        let ids = mint_entities(1);
        let solo = worker(ids[0], SkillSet::default(), WorkerRole::Auto);

        let table = solo_table(&solo, &settings);

        assert_eq!(table.get(&WorkType::Hunt), Some(&1));
        assert_eq!(table.get(&WorkType::Cook), Some(&2));
        assert_eq!(table.get(&WorkType::Grow), Some(&2));
        assert_eq!(table.get(&WorkType::Build), Some(&3));
        assert_eq!(table.get(&WorkType::Haul), Some(&4));
    }

    #[test]
    fn single_table_picks_dominant_skill() {
        let settings = OverseerSettings::default();
        let ids = mint_entities(2);
        let me = worker(
            ids[0],
            SkillSet::default().with(SkillDomain::Plants, 15, Passion::Major),
            WorkerRole::Auto,
        );
        let colony = vec![me.clone(), worker(ids[1], SkillSet::default(), WorkerRole::Auto)];

        let table = single_table(
            &me,
            &colony,
            &universe(&settings),
            &always(&settings),
            PRIORITY_TOP,
        )
        .expect("managed worker must get a table");

        assert_eq!(table.get(&WorkType::Grow), Some(&1));
        assert_eq!(table.get(&WorkType::Firefight), Some(&1));
    }

    #[test]
    fn single_table_avoids_crowded_primaries() {
        let settings = OverseerSettings::default();
        let ids = mint_entities(3);
        let skills = SkillSet::default().with(SkillDomain::Plants, 10, Passion::None);
        let me = worker(ids[0], skills.clone(), WorkerRole::Auto);
        let mut rival1 = worker(ids[1], skills.clone(), WorkerRole::Auto);
        rival1.current.insert(WorkType::Grow, 1);
        let mut rival2 = worker(ids[2], skills, WorkerRole::Auto);
        rival2.current.insert(WorkType::Grow, 1);
        let colony = vec![me.clone(), rival1, rival2];

        let table = single_table(
            &me,
            &colony,
            &universe(&settings),
            &always(&settings),
            PRIORITY_TOP,
        )
        .expect("managed worker must get a table");

        // Grow は 10 / (1 + 2*0.5) = 5 に抑制されるので、
        // 保持者 0 の Chop (同じ Plants 域、素点 10) が先に選ばれる
        assert_eq!(table.get(&WorkType::Chop), Some(&1));
    }

    #[test]
    fn single_table_skips_manual() {
        let settings = OverseerSettings::default();
        let ids = mint_entities(1);
        let manual = worker(ids[0], SkillSet::default(), WorkerRole::Manual);
        assert!(single_table(
            &manual,
            &[manual.clone()],
            &universe(&settings),
            &always(&settings),
            PRIORITY_TOP,
        )
        .is_none());
    }
}
