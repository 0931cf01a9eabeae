//! 疾病オーバーライドの閾値定数
//!
//! 各ティアは (体力率カットオフ, 症状重篤度カットオフ, 痛みカットオフ) の
//! 組で、いずれかを下回る / 上回ると Ill 状態に遷移する。

// ----- SevereOnly: 重篤な場合のみ反応 -----
pub const SEVERE_HEALTH_CUTOFF: f32 = 0.25;
pub const SEVERE_SEVERITY_CUTOFF: f32 = 0.9;
pub const SEVERE_PAIN_CUTOFF: f32 = 0.9;

// ----- MajorInjuries: 大怪我 (デフォルト) -----
pub const MAJOR_HEALTH_CUTOFF: f32 = 0.5;
pub const MAJOR_SEVERITY_CUTOFF: f32 = 0.7;
pub const MAJOR_PAIN_CUTOFF: f32 = 0.7;

// ----- AnyInjury: 中程度の怪我でも反応 -----
pub const ANY_INJURY_HEALTH_CUTOFF: f32 = 0.85;
pub const ANY_INJURY_SEVERITY_CUTOFF: f32 = 0.3;
pub const ANY_INJURY_PAIN_CUTOFF: f32 = 0.4;

// ----- MinorInjuries: かすり傷でも反応 -----
pub const MINOR_HEALTH_CUTOFF: f32 = 0.95;
pub const MINOR_SEVERITY_CUTOFF: f32 = 0.15;
pub const MINOR_PAIN_CUTOFF: f32 = 0.2;
