//! 疾病オーバーライド
//!
//! 魂ごとの Normal ⇄ Ill の 2 状態機械。Ill に入った瞬間に
//! 通常割り当てを破棄して生存タスクだけを残し、回復したら
//! その魂だけを通常再計算のキューに戻す。
//! 健康変化イベントと定期タイマーの両方で評価される。

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::entities::soul::{
    DamnedSoul, HealthState, Incapable, SkillSet, WorkPriorities, WorkerRole,
};
use crate::events::HealthChangedEvent;
use crate::systems::overseer::range::PriorityRange;
use crate::systems::overseer::settings::OverseerSettings;
use crate::systems::overseer::OverseerContext;
use crate::systems::work::{ImportanceClass, SkillDomain, WorkType};

/// 疾病反応の閾値ティア
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IllnessThreshold {
    /// 反応しない
    Disabled,
    /// 致命的な症状か瀕死のみ
    SevereOnly,
    #[default]
    MajorInjuries,
    AnyInjury,
    MinorInjuries,
}

struct TierCutoffs {
    health: f32,
    severity: f32,
    pain: f32,
}

impl IllnessThreshold {
    fn cutoffs(&self) -> Option<TierCutoffs> {
        match self {
            IllnessThreshold::Disabled => None,
            IllnessThreshold::SevereOnly => Some(TierCutoffs {
                health: SEVERE_HEALTH_CUTOFF,
                severity: SEVERE_SEVERITY_CUTOFF,
                pain: SEVERE_PAIN_CUTOFF,
            }),
            IllnessThreshold::MajorInjuries => Some(TierCutoffs {
                health: MAJOR_HEALTH_CUTOFF,
                severity: MAJOR_SEVERITY_CUTOFF,
                pain: MAJOR_PAIN_CUTOFF,
            }),
            IllnessThreshold::AnyInjury => Some(TierCutoffs {
                health: ANY_INJURY_HEALTH_CUTOFF,
                severity: ANY_INJURY_SEVERITY_CUTOFF,
                pain: ANY_INJURY_PAIN_CUTOFF,
            }),
            IllnessThreshold::MinorInjuries => Some(TierCutoffs {
                health: MINOR_HEALTH_CUTOFF,
                severity: MINOR_SEVERITY_CUTOFF,
                pain: MINOR_PAIN_CUTOFF,
            }),
        }
    }
}

/// 現在の健康状態がティアの発動条件に触れているか
pub fn meets_threshold(state: &HealthState, tier: IllnessThreshold) -> bool {
    let Some(cutoffs) = tier.cutoffs() else {
        return false;
    };

    if state.percent < cutoffs.health {
        return true;
    }
    state.afflictions.iter().any(|a| {
        (tier == IllnessThreshold::SevereOnly && a.lethal)
            || a.severity >= cutoffs.severity
            || a.pain >= cutoffs.pain
    })
}

fn capable(incapable: Option<&Incapable>, work: WorkType) -> bool {
    incapable.map(|i| !i.0.contains(&work)).unwrap_or(true)
}

/// Ill 状態で許可される優先度テーブル:
/// 消火 1 / 自己治療 1 (医療スキルが足りる場合のみ) / 安静 1、他はすべて 0
pub(crate) fn illness_table(
    skills: &SkillSet,
    incapable: Option<&Incapable>,
    settings: &OverseerSettings,
) -> Vec<(WorkType, u8)> {
    let mut table = Vec::new();
    let allow = |work: WorkType| {
        capable(incapable, work)
            && settings.is_visible(work)
            && settings.importance_of(work) != ImportanceClass::Disabled
    };

    if allow(WorkType::Firefight) {
        table.push((WorkType::Firefight, PRIORITY_TOP));
    }
    if allow(WorkType::Tend) && skills.level(SkillDomain::Medicine) >= MEDICAL_SELF_TEND_MIN_SKILL {
        table.push((WorkType::Tend, PRIORITY_TOP));
    }
    if allow(WorkType::Rest) {
        table.push((WorkType::Rest, PRIORITY_TOP));
    }
    table
}

/// 疾病状態機械の評価システム
///
/// 健康変化イベントの対象を即時評価し、加えて定期タイマーで
/// 全員を見直す。
pub fn health_override_system(
    time: Res<Time>,
    settings: Res<OverseerSettings>,
    range: Res<PriorityRange>,
    mut ctx: ResMut<OverseerContext>,
    mut ev_health: MessageReader<HealthChangedEvent>,
    mut q_souls: Query<(
        Entity,
        &DamnedSoul,
        &SkillSet,
        &mut HealthState,
        &WorkerRole,
        Option<&Incapable>,
        &mut WorkPriorities,
    )>,
) {
    ctx.health_timer.tick(time.delta());
    let periodic = ctx.health_timer.just_finished();

    let mut targets: Vec<Entity> = ev_health.read().map(|ev| ev.entity).collect();
    targets.sort();
    targets.dedup();

    let evaluate =
        |entity: Entity,
         soul: &DamnedSoul,
         skills: &SkillSet,
         health: &mut HealthState,
         role: &WorkerRole,
         incapable: Option<&Incapable>,
         priorities: &mut WorkPriorities,
         ctx: &mut OverseerContext| {
            // 手動ロール・auto off の魂には一切触れない
            if !soul.auto_assign || *role == WorkerRole::Manual {
                return;
            }

            let ill_now = settings.illness_response_enabled
                && meets_threshold(health, settings.illness_threshold);

            if ill_now && !health.was_ill {
                health.was_ill = true;
                priorities.clear();
                for (work, level) in illness_table(skills, incapable, &settings) {
                    priorities.set(work, range.map(level));
                }
                info!(
                    "HEALTH: {:?} entered illness response ({:.0}% health, {} afflictions)",
                    entity,
                    health.percent * 100.0,
                    health.afflictions.len()
                );
            } else if !ill_now && health.was_ill {
                health.was_ill = false;
                ctx.dirty.push_normal(entity);
                info!("HEALTH: {:?} recovered, queued for recompute", entity);
            }
        };

    if periodic {
        for (entity, soul, skills, mut health, role, incapable, mut priorities) in
            q_souls.iter_mut()
        {
            evaluate(
                entity,
                soul,
                skills,
                &mut health,
                role,
                incapable,
                &mut priorities,
                &mut ctx,
            );
        }
    } else {
        for entity in targets {
            let Ok((entity, soul, skills, mut health, role, incapable, mut priorities)) =
                q_souls.get_mut(entity)
            else {
                continue;
            };
            evaluate(
                entity,
                soul,
                skills,
                &mut health,
                role,
                incapable,
                &mut priorities,
                &mut ctx,
            );
        }
    }
}
