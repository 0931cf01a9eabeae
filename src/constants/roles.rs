//! 複合ロールの固定テンプレート
//!
//! tier はそのまま優先度になる (tier1 → 優先度 1, tier2 → 2, tier3 → 3)。

use crate::systems::work::WorkType;

/// 開拓者: 採掘・伐採を主務に、建築と運搬を副務に持つ
pub const COMPOSITE_PIONEER: &[(WorkType, u8)] = &[
    (WorkType::Mine, 1),
    (WorkType::Chop, 1),
    (WorkType::Build, 2),
    (WorkType::Haul, 3),
];

/// 衛生兵: 治療優先、空き時間は栽培と掃除
pub const COMPOSITE_MEDIC: &[(WorkType, u8)] = &[
    (WorkType::Tend, 1),
    (WorkType::Grow, 2),
    (WorkType::Clean, 3),
];

/// 家事係: 調理を軸に生活維持全般
pub const COMPOSITE_HOMEMAKER: &[(WorkType, u8)] = &[
    (WorkType::Cook, 1),
    (WorkType::Grow, 2),
    (WorkType::Clean, 2),
    (WorkType::Haul, 3),
];

/// 職人: 製作優先、素材確保を副務に
pub const COMPOSITE_ARTISAN: &[(WorkType, u8)] = &[
    (WorkType::Craft, 1),
    (WorkType::Mine, 2),
    (WorkType::Haul, 3),
];

// ============================================================
// カスタムロール展開の位置割合
// (重要度クラスごとに、リスト内の位置で優先度を振り分ける)
// ============================================================

/// High: 前半 → 1, 後半 → 2
pub const CUSTOM_HIGH_SPLIT: f32 = 0.5;
/// Normal/Low: 最初の 30% の境界
pub const CUSTOM_FIRST_SPLIT: f32 = 0.3;
/// Normal: 次の 40% の境界 (累積 70%)
pub const CUSTOM_SECOND_SPLIT: f32 = 0.7;
