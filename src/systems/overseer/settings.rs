//! オーバーシーア設定
//!
//! 永続化は外部の設定ストアの責務。このリソースは serde で
//! 丸ごと書き出せる形にしてある。

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::entities::soul::CustomRole;
use crate::systems::overseer::health::IllnessThreshold;
use crate::systems::overseer::quota::QuotaSetting;
use crate::systems::work::{ImportanceClass, WorkType};

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct OverseerSettings {
    /// グローバルスイッチ。off でも force 付き要求は通る
    pub auto_assign_enabled: bool,
    pub illness_response_enabled: bool,
    /// 自動フル再計算の間隔 (ゲーム内時間)
    pub recompute_interval_hours: f64,
    pub illness_threshold: IllnessThreshold,
    /// タスクごとのクォータ。未設定は min 0 / 無制限
    pub quotas: HashMap<WorkType, QuotaSetting>,
    /// 重要度の上書き。未設定はタスクのデフォルト値
    pub importance: HashMap<WorkType, ImportanceClass>,
    /// 非表示タスク (シナリオや研究状況でロックされているもの)
    pub hidden_tasks: HashSet<WorkType>,
    /// プレイヤー定義のカスタムロールテンプレート
    pub custom_role_presets: HashMap<String, CustomRole>,
}

impl Default for OverseerSettings {
    fn default() -> Self {
        Self {
            auto_assign_enabled: true,
            illness_response_enabled: true,
            recompute_interval_hours: DEFAULT_RECOMPUTE_INTERVAL_HOURS,
            illness_threshold: IllnessThreshold::MajorInjuries,
            quotas: HashMap::new(),
            importance: HashMap::new(),
            hidden_tasks: HashSet::new(),
            custom_role_presets: HashMap::new(),
        }
    }
}

impl OverseerSettings {
    pub fn importance_of(&self, work: WorkType) -> ImportanceClass {
        self.importance
            .get(&work)
            .copied()
            .unwrap_or_else(|| work.default_importance())
    }

    pub fn quota_of(&self, work: WorkType) -> QuotaSetting {
        self.quotas.get(&work).copied().unwrap_or_default()
    }

    pub fn is_visible(&self, work: WorkType) -> bool {
        !self.hidden_tasks.contains(&work)
    }

    pub fn custom_role(&self, name: &str) -> Option<&CustomRole> {
        self.custom_role_presets.get(name)
    }

    /// 表示中タスク数 (アイドル再配分の「半分未満」判定に使う)
    pub fn visible_task_count(&self) -> usize {
        WorkType::ALL
            .iter()
            .filter(|w| self.is_visible(**w))
            .count()
    }
}
