//! オーバーシーア: 作業優先度の自動割り当てエンジン
//!
//! コロニーの全魂に (タスク → 優先度) のテーブルを維持する。
//! フル再計算はコロニー全体の多段配分、イベント駆動の差分再計算は
//! 魂単位のロール解決で行う。どちらも 1 tick 内で同期的に完走する。

use bevy::prelude::*;
use thiserror::Error;

use crate::constants::*;
use crate::entities::soul::{Activity, DamnedSoul};
use crate::events::{
    HealthChangedEvent, RecomputeRequest, RoleChangedEvent, SkillChangedEvent, WorkerJoinedEvent,
    WorkerLeftEvent,
};
use crate::systems::time::{game_time_system, GameTime};
use crate::systems::work::{ImportanceClass, SkillDomain, WorkType};

pub mod dirty;
pub mod distribution;
pub mod health;
pub mod idle;
pub mod oracle;
pub mod quota;
pub mod range;
pub mod roles;
pub mod scoring;
pub mod settings;
pub mod snapshot;

use dirty::{collect_events_system, DirtyBands};
use distribution::{run_distribution, single_table, solo_table, DistributionReport};
use health::health_override_system;
use idle::idle_redirect_system;
use oracle::DemandOracle;
use range::PriorityRange;
use settings::OverseerSettings;
use snapshot::{always_enabled_tasks, apply_tables, build_task_universe, capture_workers, SoulQuery};

/// 再計算で起こり得る失敗。いずれも記録して継続し、
/// 再計算そのものを中断することはない
#[derive(Debug, Error)]
pub enum OverseerError {
    /// カスタムロールの設定が未知のタスク名を参照している
    #[error("custom role references unknown work type \"{0}\"")]
    UnknownWorkType(String),
    /// 書き込み先の魂が既に存在しない
    #[error("priority write rejected: worker {0:?} no longer exists")]
    MissingWorker(Entity),
}

/// エンジンの実行状態。セッション開始時にプラグインが構築し、
/// ダーティバンド・タイマー・直近レポートを 1 か所で所有する
#[derive(Resource)]
pub struct OverseerContext {
    pub dirty: DirtyBands,
    /// 1 tick に処理するダーティ件数の上限
    pub budget_per_tick: usize,
    /// 保留中のフル再計算。`Some(force)` の force は
    /// `auto_assign_enabled` off でも実行するか
    pub full_pending: Option<bool>,
    pub backlog_warned: bool,
    /// 最後にフル再計算したゲーム内時刻 (時間)
    pub last_full_hour: f64,
    pub health_timer: Timer,
    pub idle_timer: Timer,
    pub last_report: DistributionReport,
}

impl Default for OverseerContext {
    fn default() -> Self {
        Self {
            dirty: DirtyBands::default(),
            budget_per_tick: DIRTY_BUDGET_PER_TICK,
            full_pending: None,
            backlog_warned: false,
            last_full_hour: 0.0,
            health_timer: Timer::from_seconds(HEALTH_CHECK_INTERVAL_SECS, TimerMode::Repeating),
            idle_timer: Timer::from_seconds(IDLE_REDIRECT_INTERVAL_SECS, TimerMode::Repeating),
            last_report: DistributionReport::default(),
        }
    }
}

/// 実行順制御用のセット。ホスト側はこのセットの後に
/// 優先度テーブルを読むようにする
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OverseerSet {
    Logic,
}

/// メインの tick エントリポイント
///
/// 1. 時間間隔によるフル再計算の予約
/// 2. 保留中のフル再計算の実行 (保留ダーティはすべて破棄)
/// 3. ダーティバンドの予算内ドレイン (critical 優先)
pub fn overseer_tick_system(
    game_time: Res<GameTime>,
    settings: Res<OverseerSettings>,
    oracle: Res<DemandOracle>,
    range: Res<PriorityRange>,
    mut ctx: ResMut<OverseerContext>,
    mut q_souls: SoulQuery,
) {
    let hour = game_time.total_hours();

    if settings.auto_assign_enabled
        && ctx.full_pending.is_none()
        && hour - ctx.last_full_hour >= settings.recompute_interval_hours
    {
        ctx.full_pending = Some(false);
    }

    if let Some(force) = ctx.full_pending.take() {
        if settings.auto_assign_enabled || force {
            run_full_recompute(&mut ctx, &settings, &oracle, &range, hour, &mut q_souls);
            return;
        }
    }

    if !settings.auto_assign_enabled || ctx.dirty.is_empty() {
        return;
    }

    let workers = capture_workers(&q_souls);
    let tasks = build_task_universe(&settings, &oracle);
    let always = always_enabled_tasks(&settings);
    let top_level = range.map(PRIORITY_TOP);

    let mut budget = ctx.budget_per_tick;
    while budget > 0 {
        let Some(entity) = ctx.dirty.pop_next() else {
            break;
        };
        budget -= 1;

        let Some(snapshot) = workers.iter().find(|w| w.entity == entity) else {
            warn!("OVERSEER: {}", OverseerError::MissingWorker(entity));
            continue;
        };
        // 疾病オーバーライド中はそのテーブルを維持する
        if snapshot.ill {
            continue;
        }
        if let Some(table) = single_table(snapshot, &workers, &tasks, &always, top_level) {
            debug!(
                "OVERSEER: recomputed {:?} ({} tasks assigned)",
                entity,
                table.len()
            );
            apply_tables(&mut q_souls, &[(entity, table)], &range, hour);
        }
    }

    let backlog = ctx.dirty.len();
    if backlog > ctx.budget_per_tick * BACKLOG_WARNING_FACTOR {
        if !ctx.backlog_warned {
            warn!(
                "OVERSEER: recompute backlog sustained at {} entries (budget {})",
                backlog, ctx.budget_per_tick
            );
            ctx.backlog_warned = true;
        }
    } else if backlog <= ctx.budget_per_tick {
        ctx.backlog_warned = false;
    }
}

/// コロニー全体のフル再計算。単独コロニーは固定テーブルで済ませ、
/// 2 人以上で配分エンジンに入る
fn run_full_recompute(
    ctx: &mut OverseerContext,
    settings: &OverseerSettings,
    oracle: &DemandOracle,
    range: &PriorityRange,
    hour: f64,
    q_souls: &mut SoulQuery,
) {
    let workers = capture_workers(q_souls);
    let managed: Vec<&snapshot::WorkerSnapshot> =
        workers.iter().filter(|w| w.is_managed()).collect();

    match managed.len() {
        0 => {
            ctx.last_report = DistributionReport {
                frozen: workers.len(),
                ..Default::default()
            };
        }
        1 => {
            let worker = managed[0];
            let table = solo_table(worker, settings);
            apply_tables(q_souls, &[(worker.entity, table)], range, hour);
            info!(
                "OVERSEER: solo colony, survival table applied to {:?}",
                worker.entity
            );
            ctx.last_report = DistributionReport {
                managed: 1,
                frozen: workers.len() - 1,
                ..Default::default()
            };
        }
        _ => {
            let tasks = build_task_universe(settings, oracle);
            let always = always_enabled_tasks(settings);
            let outcome = run_distribution(&workers, &tasks, &always);
            apply_tables(q_souls, &outcome.tables, range, hour);

            for work in &outcome.report.uncoverable {
                warn!("OVERSEER: no capable worker for {}", work);
            }
            for (work, missing) in &outcome.report.shortfalls {
                warn!(
                    "OVERSEER: quota shortfall on {} ({} below minimum)",
                    work, missing
                );
            }
            info!(
                "OVERSEER: full recompute done, {} managed / {} frozen / {} tasks covered",
                outcome.report.managed, outcome.report.frozen, outcome.report.covered
            );
            ctx.last_report = outcome.report;
        }
    }

    // フル再計算は保留中の差分をすべて置き換える
    ctx.dirty.clear();
    ctx.last_full_hour = hour;
}

pub struct OverseerPlugin;

impl Plugin for OverseerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameTime>()
            .init_resource::<OverseerSettings>()
            .init_resource::<OverseerContext>()
            .init_resource::<DemandOracle>()
            .init_resource::<PriorityRange>()
            .register_type::<DamnedSoul>()
            .register_type::<Activity>()
            .register_type::<WorkType>()
            .register_type::<SkillDomain>()
            .register_type::<ImportanceClass>()
            .add_message::<WorkerJoinedEvent>()
            .add_message::<WorkerLeftEvent>()
            .add_message::<HealthChangedEvent>()
            .add_message::<SkillChangedEvent>()
            .add_message::<RoleChangedEvent>()
            .add_message::<RecomputeRequest>()
            .add_systems(
                Update,
                (
                    game_time_system,
                    collect_events_system,
                    health_override_system,
                    overseer_tick_system,
                    idle_redirect_system,
                )
                    .chain()
                    .in_set(OverseerSet::Logic),
            );
    }
}
