//! soul-overseer
//!
//! Hell Workers コロニーの魂に対する作業優先度の自動割り当てエンジン。
//! ホストシミュレーションに `OverseerPlugin` を追加すると、
//! イベント駆動の差分再計算と時間間隔のフル再計算が回り始める。
//!
//! ホスト側の責務: 魂エンティティのスポーン / despawn、スキル・健康・
//! 活動状態の更新、`crate::events` のメッセージ発行、そして
//! `WorkPriorities` テーブルの消費 (実際の作業選択)。

pub mod constants;
pub mod entities;
pub mod events;
pub mod systems;

pub use systems::overseer::{OverseerContext, OverseerPlugin, OverseerSet};
