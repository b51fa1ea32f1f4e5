//! Latent-state fusion.
//!
//! Blends self-reported, behaviorally-inferred, and astrologically-derived
//! signals into the nine-dimensional latent vector with per-dimension
//! uncertainty, confidence, and driver attribution. Missing optional inputs
//! are valid and degrade confidence rather than failing; every dimension is
//! independently clamped so one bad input cannot contaminate the rest.

use synastry_core::types::{
    CheckIn, Driver, DriverSource, InferredContext, LatentState, LatentUncertainty, LatentVector,
    ReportSource, StateModel, StatePriors,
};

use crate::weights::normalize_weights;

/// Uncertainty table applied when a direct self-report was present.
pub const UNCERTAINTY_WITH_CHECKIN: LatentUncertainty = LatentUncertainty {
    stress: 0.30,
    bis: 0.35,
    bas: 0.45,
    fffs: 0.40,
    exec_load: 0.40,
    recovery: 0.45,
    affect_volatility: 0.40,
    rumination: 0.40,
    social_appetite: 0.45,
};

/// Uncertainty table applied when no self-report was available.
pub const UNCERTAINTY_WITHOUT_CHECKIN: LatentUncertainty = LatentUncertainty {
    stress: 0.60,
    bis: 0.60,
    bas: 0.65,
    fffs: 0.65,
    exec_load: 0.65,
    recovery: 0.65,
    affect_volatility: 0.65,
    rumination: 0.65,
    social_appetite: 0.65,
};

const CALIBRATION_QUESTION: &str =
    "Quick check: how stressed do you feel right now? (Very Low / Low / Medium / High / Very High)";

/// Map a 0-100 report scalar onto the unit interval.
#[inline]
fn to_unit(v: u8) -> f64 {
    (f64::from(v) / 100.0).clamp(0.0, 1.0)
}

#[inline]
fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Fuse the available signals into a fresh [`LatentState`].
///
/// Stress estimation branches on data availability: a self-report always
/// wins over inference (confidence 0.80 for a first-person report, 0.65 for
/// a proxy report); otherwise stress is the weighted blend of inferred
/// context and the timing composite `0.65*BIS + 0.35*FFFS` at a fixed
/// confidence of 0.45. Either way the raw stress then passes through the
/// model's affine correction before driving the remaining eight dimensions.
///
/// The state model is read, never mutated; the normalized model actually
/// applied is echoed in `state_model_used`.
pub fn fuse(
    checkin: Option<&CheckIn>,
    context: Option<&InferredContext>,
    timing: Option<&StatePriors>,
    model: &StateModel,
) -> LatentState {
    let (w_user, w_timing, w_context) =
        normalize_weights(model.w_user, model.w_timing, model.w_context);
    let stress_bias = model.stress_bias;
    let stress_scale = model.stress_scale;

    let reported_stress = checkin.and_then(|c| c.stress).map(to_unit);
    let sleep_q = checkin.and_then(|c| c.sleep_quality).map(to_unit);
    let mood = checkin.and_then(|c| c.mood).map(to_unit);
    let energy = checkin.and_then(|c| c.energy).map(to_unit);

    let ctx_stress = context.map(|c| c.stress);

    let t_bis = timing.map(|t| t.bis).unwrap_or(0.0);
    let t_bas = timing.map(|t| t.bas).unwrap_or(0.0);
    let t_fffs = timing.map(|t| t.fffs).unwrap_or(0.0);

    let (mut stress, confidence, drivers) = match reported_stress {
        Some(reported) => {
            let source = checkin.map(|c| c.source).unwrap_or_default();
            let confidence = if source == ReportSource::User { 0.80 } else { 0.65 };
            let drivers = vec![Driver {
                source: DriverSource::Checkin,
                value: reported,
                weight: w_user,
            }];
            (reported, confidence, drivers)
        }
        None => {
            let timing_composite = 0.65 * t_bis + 0.35 * t_fffs;
            let mut base = 0.0;
            let mut drivers = Vec::new();
            if let Some(ctx) = ctx_stress {
                base += w_context * ctx;
                drivers.push(Driver {
                    source: DriverSource::Context,
                    value: ctx,
                    weight: w_context,
                });
            }
            base += w_timing * timing_composite;
            drivers.push(Driver {
                source: DriverSource::TimingAstro,
                value: timing_composite,
                weight: w_timing,
            });
            (clamp01(base), 0.45, drivers)
        }
    };

    stress = clamp01(stress * stress_scale + stress_bias);

    let bis = clamp01(0.65 * stress + 0.35 * t_bis);
    let bas = clamp01(0.70 * t_bas + 0.30 * energy.unwrap_or(0.5));
    let fffs = clamp01(0.60 * t_fffs + 0.40 * stress);

    let exec_load = clamp01(0.60 * stress + 0.40 * (1.0 - sleep_q.unwrap_or(0.5)));
    let recovery = clamp01(sleep_q.unwrap_or(0.5) * (1.0 - 0.6 * stress));
    let affect_volatility = clamp01(0.70 * stress + 0.30 * (1.0 - mood.unwrap_or(0.5)));
    let rumination = clamp01(0.75 * bis + 0.25 * stress);
    let social_appetite = clamp01(0.60 * (1.0 - bis) + 0.40 * energy.unwrap_or(0.5));

    let uncertainty = if reported_stress.is_some() {
        UNCERTAINTY_WITH_CHECKIN
    } else {
        UNCERTAINTY_WITHOUT_CHECKIN
    };

    let calibration_questions = if reported_stress.is_some() {
        Vec::new()
    } else {
        vec![CALIBRATION_QUESTION.to_string()]
    };

    LatentState {
        vector: LatentVector {
            stress,
            bis,
            bas,
            fffs,
            exec_load,
            recovery,
            affect_volatility,
            rumination,
            social_appetite,
        },
        uncertainty,
        drivers,
        confidence,
        calibration_questions,
        state_model_used: StateModel {
            w_user,
            w_timing,
            w_context,
            stress_bias,
            stress_scale,
        },
    }
}
