//! タスクごとの最低 / 最大人数クォータ
//!
//! 配分 1 回ぶんの走行カウントは `QuotaLedger` が持つ。
//! 凍結ワーカー (手動ロール・auto off・疾病中) の既存割り当ても
//! 容量を消費するため、パス開始前にシードしておく。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::systems::work::WorkType;

/// クォータ設定。percentage が true なら min / max をコロニー人口比 (%) として扱う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuotaSetting {
    pub min: u32,
    /// `None` = 無制限。`Some(0)` は「明示的にゼロ人」で、
    /// そのタスクはカバレッジ保証からも除外される。両者を混同しないこと
    pub max: Option<u32>,
    pub percentage: bool,
}

fn percent_of(total: usize, pct: u32) -> u32 {
    // 切り上げ: ceil(total * pct / 100)
    ((total as u32) * pct).div_ceil(100)
}

pub fn effective_min(quota: &QuotaSetting, total_workers: usize) -> u32 {
    if quota.percentage {
        percent_of(total_workers, quota.min)
    } else {
        quota.min
    }
}

pub fn effective_max(quota: &QuotaSetting, total_workers: usize) -> Option<u32> {
    quota.max.map(|m| {
        if quota.percentage {
            percent_of(total_workers, m)
        } else {
            m
        }
    })
}

/// 配分中の割り当て人数の走行カウント
#[derive(Debug, Default)]
pub(crate) struct QuotaLedger {
    counts: HashMap<WorkType, u32>,
}

impl QuotaLedger {
    /// 凍結ワーカーの既存テーブルからカウントを初期化する
    pub fn seed<I: Iterator<Item = (WorkType, u8)>>(&mut self, table: I) {
        for (work, level) in table {
            if level > 0 {
                *self.counts.entry(work).or_insert(0) += 1;
            }
        }
    }

    pub fn add(&mut self, work: WorkType) {
        *self.counts.entry(work).or_insert(0) += 1;
    }

    pub fn count(&self, work: WorkType) -> u32 {
        self.counts.get(&work).copied().unwrap_or(0)
    }

    pub fn at_max(&self, work: WorkType, max: Option<u32>) -> bool {
        matches!(max, Some(m) if self.count(work) >= m)
    }

    pub fn under_min(&self, work: WorkType, min: u32) -> bool {
        self.count(work) < min
    }
}
