//! ホストシミュレーションが発行するイベント (メッセージ)
//!
//! エンジンはこのストリームだけを購読し、ホスト側のコードには
//! 介入しない。発行箇所はワーカー状態プロバイダ側の責務。

use bevy::prelude::*;

/// 魂が派閥に正式加入した
#[derive(Message)]
pub struct WorkerJoinedEvent {
    pub entity: Entity,
}

/// 魂が死亡・捕縛などでコロニーを離れた (despawn 済み)
#[derive(Message)]
pub struct WorkerLeftEvent {
    pub entity: Entity,
}

/// 体力率または症状リストが変化した
#[derive(Message)]
pub struct HealthChangedEvent {
    pub entity: Entity,
}

/// スキルレベルまたは情熱が変化した
#[derive(Message)]
pub struct SkillChangedEvent {
    pub entity: Entity,
    pub domain: crate::systems::work::SkillDomain,
}

/// ロール記述子が変更された
#[derive(Message)]
pub struct RoleChangedEvent {
    pub entity: Entity,
}

/// 明示的な再計算要求
/// `target: None` はコロニー全体。force はスロットリングと
/// `auto_assign_enabled` ゲートを無視して即時実行する
#[derive(Message)]
pub struct RecomputeRequest {
    pub target: Option<Entity>,
    pub force: bool,
}
