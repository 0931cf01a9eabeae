//! 魂 (ワーカー) のコンポーネント群
//!
//! 派閥加入時にスポーンされ、死亡・捕縛で despawn される。
//! スキル・健康・活動状態はホストシミュレーション側が更新し、
//! オーバーシーアは `WorkPriorities` へ書き込むだけ。

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::systems::work::{ImportanceClass, SkillDomain, WorkType};

/// 地獄に堕ちた魂 (管理対象ワーカー)
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct DamnedSoul {
    /// 自動割り当ての対象にするか。off の魂は手動ロール同様に凍結される
    pub auto_assign: bool,
    /// 最後に優先度を再計算したゲーム内時刻 (時間)
    pub last_recompute_hour: f64,
}

impl Default for DamnedSoul {
    fn default() -> Self {
        Self {
            auto_assign: true,
            last_recompute_hour: -1.0,
        }
    }
}

/// スキル領域ごとの情熱
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum Passion {
    #[default]
    None,
    Minor,
    Major,
}

/// 1 領域ぶんのスキル値
#[derive(Debug, Clone, Copy, Default)]
pub struct Skill {
    /// 0..=20
    pub level: u8,
    pub passion: Passion,
}

/// 魂のスキル一覧。未登録の領域はレベル 0・情熱なし扱い
#[derive(Component, Debug, Clone, Default)]
pub struct SkillSet {
    skills: HashMap<SkillDomain, Skill>,
}

impl SkillSet {
    /// テスト・スポーン用のビルダー
    pub fn with(mut self, domain: SkillDomain, level: u8, passion: Passion) -> Self {
        self.skills.insert(domain, Skill { level, passion });
        self
    }

    pub fn set(&mut self, domain: SkillDomain, level: u8, passion: Passion) {
        self.skills.insert(domain, Skill { level, passion });
    }

    pub fn level(&self, domain: SkillDomain) -> u8 {
        self.skills.get(&domain).map(|s| s.level).unwrap_or(0)
    }

    pub fn passion(&self, domain: SkillDomain) -> Passion {
        self.skills
            .get(&domain)
            .map(|s| s.passion)
            .unwrap_or(Passion::None)
    }
}

/// 病気・怪我の 1 症状
#[derive(Debug, Clone)]
pub struct Affliction {
    pub name: String,
    /// 重篤度 0.0..=1.0
    pub severity: f32,
    /// 痛み 0.0..=1.0
    pub pain: f32,
    /// 放置すると致命的か
    pub lethal: bool,
}

/// 健康状態。`was_ill` は疾病オーバーライドのラッチ
#[derive(Component, Debug, Clone)]
pub struct HealthState {
    /// 体力率 0.0..=1.0
    pub percent: f32,
    pub afflictions: Vec<Affliction>,
    pub was_ill: bool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            percent: 1.0,
            afflictions: Vec::new(),
            was_ill: false,
        }
    }
}

/// 現在の活動分類。idle 判定の基準はホスト側の責務で、
/// エンジンはこのフラグだけを見る
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Activity {
    pub is_idle: bool,
}

/// この魂が決して行えない作業種別
#[derive(Component, Debug, Clone, Default)]
pub struct Incapable(pub HashSet<WorkType>);

/// カスタムロール: 設定ストアが永続化した (タスク名, 重要度) の順序付きリスト。
/// タスク名は適用時に解決し、未知の名前はスキップして警告する
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomRole {
    pub entries: Vec<(String, ImportanceClass)>,
}

/// 複合ロールの固定テンプレート
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompositeRole {
    Pioneer,
    Medic,
    Homemaker,
    Artisan,
}

impl CompositeRole {
    /// tier → 優先度のテンプレート (tier1 → 1, tier2 → 2, tier3 → 3)
    pub fn job_list(&self) -> &'static [(WorkType, u8)] {
        use crate::constants::*;
        match self {
            CompositeRole::Pioneer => COMPOSITE_PIONEER,
            CompositeRole::Medic => COMPOSITE_MEDIC,
            CompositeRole::Homemaker => COMPOSITE_HOMEMAKER,
            CompositeRole::Artisan => COMPOSITE_ARTISAN,
        }
    }
}

/// ロール記述子。Manual の魂にはエンジンは一切触れない
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub enum WorkerRole {
    #[default]
    Auto,
    Manual,
    /// 単一タスク固定 (優先度 1)
    Single(WorkType),
    Composite(CompositeRole),
    Custom(CustomRole),
}

/// 出力: タスク → 優先度のマッピング。0 / 未登録 = 未割り当て
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct WorkPriorities {
    table: HashMap<WorkType, u8>,
}

impl WorkPriorities {
    pub fn get(&self, work: WorkType) -> u8 {
        self.table.get(&work).copied().unwrap_or(0)
    }

    /// 0 を書くとエントリ自体を消す (未割り当てに戻す)
    pub fn set(&mut self, work: WorkType, level: u8) {
        if level == 0 {
            self.table.remove(&work);
        } else {
            self.table.insert(work, level);
        }
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// 優先度が付いているタスク数
    pub fn assigned_count(&self) -> usize {
        self.table.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WorkType, u8)> + '_ {
        self.table.iter().map(|(w, l)| (*w, *l))
    }
}

/// 派閥加入時のスポーン一式。ロールは Auto、自動割り当て on で始まる
#[derive(Bundle, Default)]
pub struct SoulBundle {
    pub soul: DamnedSoul,
    pub skills: SkillSet,
    pub health: HealthState,
    pub activity: Activity,
    pub role: WorkerRole,
    pub priorities: WorkPriorities,
}
