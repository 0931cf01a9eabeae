//! 適性スコアモデル
//!
//! `base_score` は魂 × タスクの純粋関数。コロニー配分時の
//! 緊急度ボーナスや需要倍率はここではなく配分パス側で掛ける。

use crate::constants::*;
use crate::entities::soul::{Passion, SkillSet};
use crate::systems::work::WorkType;

/// タスクの関連スキル領域ごとに情熱補正を掛けて平均した適性スコア。
/// 関連領域が無いタスクは基礎値 1 (スキル不問でも割り当て可能に保つ)。
/// 結果は 1 を下回らない
pub fn base_score(skills: &SkillSet, work: WorkType) -> f32 {
    let domains = work.skill_domains();
    if domains.is_empty() {
        return UNSKILLED_BASELINE;
    }

    let mut total = 0.0;
    for domain in domains {
        let level = skills.level(*domain) as f32;
        total += match skills.passion(*domain) {
            Passion::Major => level * PASSION_MAJOR_MULTIPLIER + PASSION_MAJOR_GROWTH_BONUS,
            Passion::Minor => level * PASSION_MINOR_MULTIPLIER + PASSION_MINOR_GROWTH_BONUS,
            Passion::None => level,
        };
    }

    (total / domains.len() as f32).max(SCORE_FLOOR)
}
