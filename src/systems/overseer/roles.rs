//! ロール記述子の解決
//!
//! バリアントごとに 1 つの解決関数。固定リストを返すか、
//! Auto (スコアラー任せ) / Skip (手動・不介入) の番兵を返す。

use std::str::FromStr;

use bevy::prelude::*;

use crate::constants::*;
use crate::entities::soul::{CustomRole, WorkerRole};
use crate::systems::overseer::OverseerError;
use crate::systems::work::{ImportanceClass, WorkType};

/// 解決結果
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResolvedRole {
    /// 固定の (タスク, 優先度) リスト。先頭がプライマリ
    Pinned(Vec<(WorkType, u8)>),
    /// スコアラーに最適タスクを選ばせる
    Auto,
    /// この魂には触れない
    Skip,
}

pub(crate) fn resolve_role(role: &WorkerRole) -> ResolvedRole {
    match role {
        WorkerRole::Auto => ResolvedRole::Auto,
        WorkerRole::Manual => ResolvedRole::Skip,
        WorkerRole::Single(work) => ResolvedRole::Pinned(vec![(*work, PRIORITY_TOP)]),
        WorkerRole::Composite(template) => ResolvedRole::Pinned(template.job_list().to_vec()),
        WorkerRole::Custom(custom) => ResolvedRole::Pinned(expand_custom(custom)),
    }
}

/// 重要度クラスとリスト内位置から優先度を決める。
/// カスタムロール展開と Pass D の副業振り分けで共用する
pub(crate) fn spread_level(importance: ImportanceClass, index: usize, len: usize) -> u8 {
    let frac = index as f32 / len.max(1) as f32;
    match importance {
        ImportanceClass::Critical => 1,
        ImportanceClass::High => {
            if frac < CUSTOM_HIGH_SPLIT {
                1
            } else {
                2
            }
        }
        ImportanceClass::Normal => {
            if frac < CUSTOM_FIRST_SPLIT {
                2
            } else if frac < CUSTOM_SECOND_SPLIT {
                3
            } else {
                4
            }
        }
        ImportanceClass::Low => {
            if frac < CUSTOM_FIRST_SPLIT {
                3
            } else {
                4
            }
        }
        ImportanceClass::VeryLow => 4,
        ImportanceClass::Disabled => 0,
    }
}

/// カスタムロールを (タスク, 優先度) リストへ展開する。
/// 重要度クラスごとにまとめ、クラス内の並び順で優先度を振る。
/// 未知のタスク名はスキップして続行する
fn expand_custom(custom: &CustomRole) -> Vec<(WorkType, u8)> {
    let mut resolved: Vec<(WorkType, ImportanceClass)> = Vec::new();
    for (name, importance) in &custom.entries {
        match WorkType::from_str(name) {
            Ok(work) => resolved.push((work, *importance)),
            Err(()) => {
                warn!(
                    "OVERSEER: {}",
                    OverseerError::UnknownWorkType(name.clone())
                );
            }
        }
    }

    let mut table = Vec::new();
    for class in ImportanceClass::RANKED {
        let group: Vec<WorkType> = resolved
            .iter()
            .filter(|(_, c)| *c == class)
            .map(|(w, _)| *w)
            .collect();
        for (index, work) in group.iter().enumerate() {
            let level = spread_level(class, index, group.len());
            if level > 0 {
                table.push((*work, level));
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::soul::CompositeRole;

    fn custom(entries: &[(&str, ImportanceClass)]) -> CustomRole {
        CustomRole {
            entries: entries
                .iter()
                .map(|(n, c)| (n.to_string(), *c))
                .collect(),
        }
    }

    #[test]
    fn manual_is_skip_sentinel() {
        assert_eq!(resolve_role(&WorkerRole::Manual), ResolvedRole::Skip);
        assert_eq!(resolve_role(&WorkerRole::Auto), ResolvedRole::Auto);
    }

    #[test]
    fn single_preset_pins_at_top_priority() {
        let resolved = resolve_role(&WorkerRole::Single(WorkType::Cook));
        assert_eq!(resolved, ResolvedRole::Pinned(vec![(WorkType::Cook, 1)]));
    }

    #[test]
    fn composite_uses_template_tiers() {
        let ResolvedRole::Pinned(list) = resolve_role(&WorkerRole::Composite(CompositeRole::Medic))
        else {
            panic!("composite must resolve to a pinned list");
        };
        assert_eq!(list[0], (WorkType::Tend, 1));
        assert!(list.iter().all(|(_, level)| (1..=3).contains(level)));
    }

    #[test]
    fn custom_normal_class_splits_30_40_30() {
        let role = custom(&[
            ("cook", ImportanceClass::Normal),
            ("grow", ImportanceClass::Normal),
            ("build", ImportanceClass::Normal),
            ("mine", ImportanceClass::Normal),
            ("chop", ImportanceClass::Normal),
            ("haul", ImportanceClass::Normal),
            ("clean", ImportanceClass::Normal),
            ("craft", ImportanceClass::Normal),
            ("research", ImportanceClass::Normal),
            ("hunt", ImportanceClass::Normal),
        ]);
        let ResolvedRole::Pinned(list) = resolve_role(&WorkerRole::Custom(role)) else {
            panic!("custom must resolve to a pinned list");
        };
        let levels: Vec<u8> = list.iter().map(|(_, l)| *l).collect();
        assert_eq!(levels, vec![2, 2, 2, 3, 3, 3, 3, 4, 4, 4]);
    }

    #[test]
    fn custom_critical_and_very_low_are_flat() {
        let role = custom(&[
            ("haul", ImportanceClass::VeryLow),
            ("cook", ImportanceClass::Critical),
            ("clean", ImportanceClass::VeryLow),
        ]);
        let ResolvedRole::Pinned(list) = resolve_role(&WorkerRole::Custom(role)) else {
            panic!("custom must resolve to a pinned list");
        };
        // Critical グループが先頭に来る
        assert_eq!(list[0], (WorkType::Cook, 1));
        assert_eq!(list[1], (WorkType::Haul, 4));
        assert_eq!(list[2], (WorkType::Clean, 4));
    }

    #[test]
    fn custom_high_class_splits_in_half() {
        let role = custom(&[
            ("cook", ImportanceClass::High),
            ("grow", ImportanceClass::High),
            ("build", ImportanceClass::High),
            ("mine", ImportanceClass::High),
        ]);
        let ResolvedRole::Pinned(list) = resolve_role(&WorkerRole::Custom(role)) else {
            panic!("custom must resolve to a pinned list");
        };
        let levels: Vec<u8> = list.iter().map(|(_, l)| *l).collect();
        assert_eq!(levels, vec![1, 1, 2, 2]);
    }

    #[test]
    fn unknown_custom_entry_is_skipped() {
        let role = custom(&[
            ("torture", ImportanceClass::Critical),
            ("cook", ImportanceClass::Critical),
        ]);
        let ResolvedRole::Pinned(list) = resolve_role(&WorkerRole::Custom(role)) else {
            panic!("custom must resolve to a pinned list");
        };
        assert_eq!(list, vec![(WorkType::Cook, 1)]);
    }

    #[test]
    fn disabled_custom_entries_are_dropped() {
        let role = custom(&[("cook", ImportanceClass::Disabled)]);
        let ResolvedRole::Pinned(list) = resolve_role(&WorkerRole::Custom(role)) else {
            panic!("custom must resolve to a pinned list");
        };
        assert!(list.is_empty());
    }
}
