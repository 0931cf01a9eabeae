//! 作業需要オラクル
//!
//! マップ状態をスキャンして緊急度を算出するのは外部コラボレータの
//! 仕事。エンジンはこのインターフェース越しにしか需要を見ない。

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::systems::work::WorkType;

pub trait WorkDemandOracle: Send + Sync + 'static {
    /// タスクの緊急度 (加算ボーナス)。0.0 = 需要情報なし
    fn urgency(&self, work: WorkType) -> f32;
    /// 実際に未処理の作業が存在するか
    fn has_pending_work(&self, work: WorkType) -> bool;
}

/// 需要情報を持たないデフォルト実装
pub struct NullDemand;

impl WorkDemandOracle for NullDemand {
    fn urgency(&self, _work: WorkType) -> f32 {
        0.0
    }

    fn has_pending_work(&self, _work: WorkType) -> bool {
        false
    }
}

/// 固定テーブル実装。デモとテストのほか、ホスト側が
/// スキャン結果を流し込む単純な受け皿としても使える
#[derive(Default)]
pub struct FixedDemand {
    urgency: HashMap<WorkType, f32>,
    active: HashSet<WorkType>,
}

impl FixedDemand {
    pub fn with_urgency(mut self, work: WorkType, urgency: f32) -> Self {
        self.urgency.insert(work, urgency);
        self
    }

    pub fn with_active(mut self, work: WorkType) -> Self {
        self.active.insert(work);
        self
    }
}

impl WorkDemandOracle for FixedDemand {
    fn urgency(&self, work: WorkType) -> f32 {
        self.urgency.get(&work).copied().unwrap_or(0.0)
    }

    fn has_pending_work(&self, work: WorkType) -> bool {
        self.active.contains(&work)
    }
}

/// オラクルを保持するリソース
#[derive(Resource)]
pub struct DemandOracle(Box<dyn WorkDemandOracle>);

impl Default for DemandOracle {
    fn default() -> Self {
        Self(Box::new(NullDemand))
    }
}

impl DemandOracle {
    pub fn new(oracle: impl WorkDemandOracle) -> Self {
        Self(Box::new(oracle))
    }

    pub fn urgency(&self, work: WorkType) -> f32 {
        self.0.urgency(work)
    }

    pub fn has_pending_work(&self, work: WorkType) -> bool {
        self.0.has_pending_work(work)
    }
}
