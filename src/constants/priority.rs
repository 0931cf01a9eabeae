//! 優先度テーブル・再計算スケジューリング定数
//!
//! 優先度は数値が小さいほど高い (1 = 最優先、4 = 最低、0 = 未割り当て)。

use crate::systems::work::WorkType;

/// 未割り当てを表す優先度
pub const PRIORITY_UNASSIGNED: u8 = 0;
/// プライマリ (固定ロール・常時有効タスク) の優先度
pub const PRIORITY_TOP: u8 = 1;
/// カバレッジ保証・クォータ補充で追加される優先度
pub const PRIORITY_COVERAGE: u8 = 2;
/// アイドル再配分で追加される優先度
pub const PRIORITY_IDLE_FILL: u8 = 4;
/// 拡張アダプタ未導入時の優先度上限
pub const PRIORITY_DEFAULT_MAX: u8 = 4;

// ============================================================
// 副業 (Pass D) の上限人数テーブル
// コロニーが大きいほど一人あたりの副業数を絞る
// ============================================================

pub const SECONDARY_CAP_TINY_COLONY: usize = 12; // 管理対象 3 人以下
pub const SECONDARY_CAP_SMALL_COLONY: usize = 9; // 6 人以下
pub const SECONDARY_CAP_MID_COLONY: usize = 7; // 10 人以下
pub const SECONDARY_CAP_LARGE_COLONY: usize = 5; // それ以上

// ============================================================
// イベント駆動再計算
// ============================================================

/// 1 tick あたりのダーティ処理数
pub const DIRTY_BUDGET_PER_TICK: usize = 3;
/// バックログ警告を出す滞留倍率 (予算 × この値)
pub const BACKLOG_WARNING_FACTOR: usize = 2;
/// 自動フル再計算のデフォルト間隔 (ゲーム内時間)
pub const DEFAULT_RECOMPUTE_INTERVAL_HOURS: f64 = 24.0;
/// 健康状態の定期チェック間隔 (秒)
pub const HEALTH_CHECK_INTERVAL_SECS: f32 = 2.0;
/// アイドル再配分スキャンの間隔 (秒)。フル再計算とは独立
pub const IDLE_REDIRECT_INTERVAL_SECS: f32 = 7.5;
/// アイドル再配分で追加するタスク数の上限
pub const IDLE_REDIRECT_TASK_COUNT: usize = 5;

/// 自己治療タスクを許可する最低医療スキル
pub const MEDICAL_SELF_TEND_MIN_SKILL: u8 = 3;

/// 単独コロニー用の固定サバイバル優先度テーブル
/// 管理対象が 1 人のときは配分エンジンを通さずこの表を適用する
pub const SOLO_SURVIVAL_TABLE: &[(WorkType, u8)] = &[
    (WorkType::Firefight, 1),
    (WorkType::Hunt, 1),
    (WorkType::Rest, 1),
    (WorkType::Tend, 2),
    (WorkType::Cook, 2),
    (WorkType::Grow, 2),
    (WorkType::Build, 3),
    (WorkType::Mine, 3),
    (WorkType::Chop, 3),
    (WorkType::Haul, 4),
    (WorkType::Clean, 4),
];
