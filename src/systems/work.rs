//! 作業種別 (WorkType) とその静的メタデータ
//!
//! タスクの全集合は列挙型で表す。スキル領域・デフォルト重要度・
//! 常時有効フラグはバリアントごとのメソッドで引く。

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// スキル領域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum SkillDomain {
    Shooting,
    Animals,
    Medicine,
    Cooking,
    Plants,
    Construction,
    Mining,
    Crafting,
    Intellectual,
}

/// 作業種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum WorkType {
    Firefight, // 消火
    Rest,      // 安静 (病床)
    Tend,      // 治療
    Hunt,      // 狩猟
    Cook,      // 調理
    Grow,      // 栽培
    Build,     // 建築
    Mine,      // 採掘
    Chop,      // 伐採
    Haul,      // 運搬
    Clean,     // 掃除
    Craft,     // 製作
    Research,  // 研究
}

impl WorkType {
    /// 宣言順の全バリアント。スコアの同点時はこの順で先勝ちする
    pub const ALL: [WorkType; 13] = [
        WorkType::Firefight,
        WorkType::Rest,
        WorkType::Tend,
        WorkType::Hunt,
        WorkType::Cook,
        WorkType::Grow,
        WorkType::Build,
        WorkType::Mine,
        WorkType::Chop,
        WorkType::Haul,
        WorkType::Clean,
        WorkType::Craft,
        WorkType::Research,
    ];

    /// このタスクの適性評価に使うスキル領域 (空ならスキル不問)
    pub fn skill_domains(&self) -> &'static [SkillDomain] {
        match self {
            WorkType::Firefight => &[],
            WorkType::Rest => &[],
            WorkType::Tend => &[SkillDomain::Medicine],
            WorkType::Hunt => &[SkillDomain::Shooting, SkillDomain::Animals],
            WorkType::Cook => &[SkillDomain::Cooking],
            WorkType::Grow => &[SkillDomain::Plants],
            WorkType::Build => &[SkillDomain::Construction],
            WorkType::Mine => &[SkillDomain::Mining],
            WorkType::Chop => &[SkillDomain::Plants],
            WorkType::Haul => &[],
            WorkType::Clean => &[],
            WorkType::Craft => &[SkillDomain::Crafting],
            WorkType::Research => &[SkillDomain::Intellectual],
        }
    }

    /// 生存に直結する常時有効タスクか
    /// (配分エンジンのタスク母集合からは除外され、全員に優先度 1 で付与される)
    pub fn is_always_enabled(&self) -> bool {
        matches!(self, WorkType::Firefight | WorkType::Rest)
    }

    pub fn default_importance(&self) -> ImportanceClass {
        match self {
            WorkType::Firefight | WorkType::Rest => ImportanceClass::Critical,
            _ => ImportanceClass::Normal,
        }
    }

    /// 設定ストアとの往復に使う表示名
    pub fn label(&self) -> &'static str {
        match self {
            WorkType::Firefight => "firefight",
            WorkType::Rest => "rest",
            WorkType::Tend => "tend",
            WorkType::Hunt => "hunt",
            WorkType::Cook => "cook",
            WorkType::Grow => "grow",
            WorkType::Build => "build",
            WorkType::Mine => "mine",
            WorkType::Chop => "chop",
            WorkType::Haul => "haul",
            WorkType::Clean => "clean",
            WorkType::Craft => "craft",
            WorkType::Research => "research",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkType::ALL
            .iter()
            .copied()
            .find(|w| w.label() == s)
            .ok_or(())
    }
}

/// タスクごとの重要度クラス
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize,
)]
pub enum ImportanceClass {
    Disabled,
    VeryLow,
    Low,
    Normal,
    High,
    Critical,
}

impl ImportanceClass {
    /// ランキング用の補正係数。Disabled はスコアリング前に除外される前提
    pub fn ranking_modifier(&self) -> f32 {
        match self {
            ImportanceClass::Disabled => 0.0,
            ImportanceClass::VeryLow => IMPORTANCE_VERY_LOW_MODIFIER,
            ImportanceClass::Low => IMPORTANCE_LOW_MODIFIER,
            ImportanceClass::Normal => IMPORTANCE_NORMAL_MODIFIER,
            ImportanceClass::High => IMPORTANCE_HIGH_MODIFIER,
            ImportanceClass::Critical => IMPORTANCE_CRITICAL_MODIFIER,
        }
    }

    /// カスタムロール展開・Pass D の振り分けで使う降順
    pub const RANKED: [ImportanceClass; 5] = [
        ImportanceClass::Critical,
        ImportanceClass::High,
        ImportanceClass::Normal,
        ImportanceClass::Low,
        ImportanceClass::VeryLow,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for work in WorkType::ALL {
            assert_eq!(WorkType::from_str(work.label()), Ok(work));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(WorkType::from_str("daydream").is_err());
    }

    #[test]
    fn survival_tasks_are_always_enabled_and_critical() {
        for work in [WorkType::Firefight, WorkType::Rest] {
            assert!(work.is_always_enabled());
            assert_eq!(work.default_importance(), ImportanceClass::Critical);
        }
        assert!(!WorkType::Haul.is_always_enabled());
    }
}
