//! Latent-state structures: priors, check-ins, the fused state vector, and
//! the per-subject state model.

use serde::{Deserialize, Serialize};

/// Transit-derived state priors, each in [0, 1).
///
/// Produced by the weighted accumulation over transit events followed by the
/// saturating squash; consumed by the fusion engine as the timing signal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatePriors {
    /// Behavioral inhibition.
    pub bis: f64,
    /// Behavioral approach.
    pub bas: f64,
    /// Fight-flight-freeze.
    pub fffs: f64,
}

/// Who produced a self-report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    /// The subject reported on themselves.
    #[default]
    User,
    /// Reported on the subject's behalf (caregiver, clinician, import).
    Proxy,
}

/// A self-reported check-in on the 0-100 scale.
///
/// Absent scalars are valid and degrade confidence rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckIn {
    pub stress: Option<u8>,
    pub sleep_quality: Option<u8>,
    pub mood: Option<u8>,
    pub energy: Option<u8>,
    #[serde(default)]
    pub source: ReportSource,
}

/// Behaviorally-inferred context signals, already on the unit scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InferredContext {
    pub stress: f64,
}

/// Origin of a stress driver contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverSource {
    Checkin,
    Context,
    TimingAstro,
}

/// One attributed contribution to the fused stress estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub source: DriverSource,
    pub value: f64,
    pub weight: f64,
}

/// The nine named latent dimensions, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatentVector {
    pub stress: f64,
    pub bis: f64,
    pub bas: f64,
    pub fffs: f64,
    pub exec_load: f64,
    pub recovery: f64,
    pub affect_volatility: f64,
    pub rumination: f64,
    pub social_appetite: f64,
}

/// Per-dimension uncertainty, each in [0, 1].
///
/// There is no continuous uncertainty model: values come from one of exactly
/// two fixed tables, selected by self-report presence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatentUncertainty {
    pub stress: f64,
    pub bis: f64,
    pub bas: f64,
    pub fffs: f64,
    pub exec_load: f64,
    pub recovery: f64,
    pub affect_volatility: f64,
    pub rumination: f64,
    pub social_appetite: f64,
}

/// The fused latent state produced on every fusion call.
///
/// Produced fresh each call; the caller owns persistence and versioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatentState {
    pub vector: LatentVector,
    pub uncertainty: LatentUncertainty,
    /// Attributed contributions to the stress estimate.
    pub drivers: Vec<Driver>,
    /// Overall confidence in [0, 1].
    pub confidence: f64,
    /// Follow-up questions to raise calibration; empty when a self-report
    /// was present.
    pub calibration_questions: Vec<String>,
    /// The normalized model the fusion actually applied.
    pub state_model_used: StateModel,
}

/// Per-subject fusion model.
///
/// The only entity with cross-call memory. The fusion engine reads it and
/// may return an updated copy after an online-learning step; all mutation is
/// explicit and by value. Concurrent read-modify-write for the same subject
/// must be serialized by the caller (per-subject mutex or single-writer
/// queue) - the core provides no locking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateModel {
    /// Weight on self-reported signals.
    pub w_user: f64,
    /// Weight on the astrologically-derived timing signal.
    pub w_timing: f64,
    /// Weight on behaviorally-inferred context.
    pub w_context: f64,
    /// Additive stress correction, clamped to [-0.25, 0.25].
    pub stress_bias: f64,
    /// Multiplicative stress correction.
    pub stress_scale: f64,
}

impl Default for StateModel {
    fn default() -> Self {
        Self {
            w_user: 0.60,
            w_timing: 0.20,
            w_context: 0.20,
            stress_bias: 0.0,
            stress_scale: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_model_default() {
        let model = StateModel::default();
        assert_eq!(model.w_user, 0.60);
        assert_eq!(model.w_timing, 0.20);
        assert_eq!(model.w_context, 0.20);
        assert_eq!(model.stress_bias, 0.0);
        assert_eq!(model.stress_scale, 1.0);
    }

    #[test]
    fn test_checkin_defaults_to_user_source() {
        let checkin: CheckIn = serde_json::from_str(r#"{"stress": 40}"#).unwrap();
        assert_eq!(checkin.source, ReportSource::User);
        assert_eq!(checkin.stress, Some(40));
        assert_eq!(checkin.sleep_quality, None);
    }

    #[test]
    fn test_driver_source_serde_names() {
        assert_eq!(
            serde_json::to_string(&DriverSource::TimingAstro).unwrap(),
            "\"timing_astro\""
        );
    }
}
