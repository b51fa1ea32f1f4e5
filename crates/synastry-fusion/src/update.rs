//! Online state-model update.

use synastry_core::config::FusionConfig;
use synastry_core::types::StateModel;

use crate::weights::normalize_weights;

/// Nudge the state model toward an observed ground truth.
///
/// A bounded stochastic-gradient-style rule, not a Bayesian update. Given
/// `err = ground_truth - predicted`:
///
/// - `stress_bias += lr_bias * err`, clamped to [-0.25, 0.25]
/// - `w_timing += lr_w * err * (timing_signal - 0.5)`, clamped to
///   [0.05, max_timing_weight]
/// - `w_user = clamp(1 - w_timing - w_context, 0.40, 0.90)`
/// - the triple is renormalized
///
/// The clamps guarantee the rule never diverges under repeated calls, even
/// with adversarial always-maximal error. The input model is consumed by
/// value and a fresh model returned; serializing read-modify-write per
/// subject is the caller's responsibility.
pub fn update_state_model(
    current: StateModel,
    timing_signal: f64,
    predicted_stress: f64,
    ground_truth_stress: f64,
    config: &FusionConfig,
) -> StateModel {
    let (_, mut w_timing, w_context) =
        normalize_weights(current.w_user, current.w_timing, current.w_context);
    let err = ground_truth_stress - predicted_stress;

    let stress_bias = (current.stress_bias + config.lr_bias * err).clamp(-0.25, 0.25);

    let centered = timing_signal - 0.5;
    w_timing = (w_timing + config.lr_w * err * centered).clamp(0.05, config.max_timing_weight);

    let w_user = (1.0 - w_timing - w_context).clamp(0.40, 0.90);
    let (w_user, w_timing, w_context) = normalize_weights(w_user, w_timing, w_context);

    tracing::debug!(
        err,
        stress_bias,
        w_user,
        w_timing,
        w_context,
        "state model updated"
    );

    StateModel {
        w_user,
        w_timing,
        w_context,
        stress_bias,
        stress_scale: current.stress_scale,
    }
}
