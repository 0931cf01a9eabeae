//! スコアリング定数 (適性・重要度・配分ブースト)

// ============================================================
// 適性スコア (Affinity)
// ============================================================

/// Major 情熱のスキル倍率
pub const PASSION_MAJOR_MULTIPLIER: f32 = 2.0;
/// Major 情熱の成長ボーナス (加算)
pub const PASSION_MAJOR_GROWTH_BONUS: f32 = 5.0;
/// Minor 情熱のスキル倍率
pub const PASSION_MINOR_MULTIPLIER: f32 = 1.5;
/// Minor 情熱の成長ボーナス (加算)
pub const PASSION_MINOR_GROWTH_BONUS: f32 = 2.0;
/// スキル無関係タスクの基礎スコア
pub const UNSKILLED_BASELINE: f32 = 1.0;
/// 適性スコアの下限
pub const SCORE_FLOOR: f32 = 1.0;

// ============================================================
// 重要度クラスのランキング補正
// ============================================================

pub const IMPORTANCE_CRITICAL_MODIFIER: f32 = 3.0;
pub const IMPORTANCE_HIGH_MODIFIER: f32 = 1.8;
pub const IMPORTANCE_NORMAL_MODIFIER: f32 = 1.0;
pub const IMPORTANCE_LOW_MODIFIER: f32 = 0.6;
pub const IMPORTANCE_VERY_LOW_MODIFIER: f32 = 0.3;

// ============================================================
// コロニー配分時のブースト係数
// ============================================================

/// 未カバータスクの倍率 (Pass B)
pub const UNCOVERED_TASK_MULTIPLIER: f32 = 2.0;
/// 最低人数未満タスクの倍率 (Pass B)
pub const UNDER_MINIMUM_MULTIPLIER: f32 = 2.5;
/// 他者がプライマリ保持中のタスクの倍率 (Pass B)
pub const TAKEN_PRIMARY_MULTIPLIER: f32 = 0.3;
/// 他者のプライマリを副業として支援する倍率 (Pass D)
pub const ASSIST_PRIMARY_MULTIPLIER: f32 = 1.3;
/// 実需要ありタスクの倍率 (プライマリ選定時)
pub const ACTIVE_DEMAND_PRIMARY_MULTIPLIER: f32 = 1.3;
/// 実需要ありタスクの倍率 (副業選定時)
pub const ACTIVE_DEMAND_SECONDARY_MULTIPLIER: f32 = 1.4;
/// 実需要ありタスクの倍率 (アイドル再配分時)
pub const ACTIVE_DEMAND_IDLE_MULTIPLIER: f32 = 3.0;
/// Auto ロール解決時のプライマリ集中抑制係数
/// score / (1 + holders * この値) で同一タスクへの偏りを抑える
pub const PRIMARY_CONCENTRATION_DAMPING: f32 = 0.5;
