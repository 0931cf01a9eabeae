//! 拡張優先度レンジアダプタ
//!
//! サードパーティの優先度拡張が入っている環境では、内部の 1..=4 を
//! 外部レンジへ写像してから書き込む。検出はセッション開始時に
//! ホストが行い、エンジンはインターフェースにしか依存しない。

use bevy::prelude::*;

use crate::constants::PRIORITY_DEFAULT_MAX;

pub trait PriorityRangeAdapter: Send + Sync + 'static {
    /// 外部レンジの最大優先度
    fn max_level(&self) -> u8;
    /// 内部優先度 (1..=4) → 外部優先度
    fn map(&self, level: u8) -> u8;
}

/// 導入済みアダプタの置き場。未導入なら恒等写像
#[derive(Resource, Default)]
pub struct PriorityRange {
    adapter: Option<Box<dyn PriorityRangeAdapter>>,
}

impl PriorityRange {
    pub fn install(&mut self, adapter: impl PriorityRangeAdapter) {
        info!(
            "OVERSEER: extended priority range installed (max {})",
            adapter.max_level()
        );
        self.adapter = Some(Box::new(adapter));
    }

    pub fn max_level(&self) -> u8 {
        self.adapter
            .as_ref()
            .map(|a| a.max_level())
            .unwrap_or(PRIORITY_DEFAULT_MAX)
    }

    /// 0 (未割り当て) は写像しない
    pub fn map(&self, level: u8) -> u8 {
        if level == 0 {
            return 0;
        }
        match &self.adapter {
            Some(adapter) => adapter.map(level),
            None => level,
        }
    }
}

/// 1..=4 を 1..=max へ線形に引き延ばす素朴なアダプタ
pub struct LinearRange {
    pub max: u8,
}

impl PriorityRangeAdapter for LinearRange {
    fn max_level(&self) -> u8 {
        self.max
    }

    fn map(&self, level: u8) -> u8 {
        let level = level.clamp(1, PRIORITY_DEFAULT_MAX) as u16;
        let span = (self.max.max(1) - 1) as u16;
        ((level - 1) * span / (PRIORITY_DEFAULT_MAX as u16 - 1) + 1) as u8
    }
}
