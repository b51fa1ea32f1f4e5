//! Source-weight normalization.

/// Default weight triple used when a stored model degenerates to zero.
pub const DEFAULT_WEIGHTS: (f64, f64, f64) = (0.60, 0.20, 0.20);

/// Threshold under which a weight sum counts as zero.
const EPSILON: f64 = 1e-9;

/// Normalize the (user, timing, context) weight triple.
///
/// Negative inputs are floored at zero. If the sum is effectively zero the
/// fixed default (0.60, 0.20, 0.20) is returned instead of erroring - a
/// degenerate stored model silently recovers so fusion always produces
/// output. Otherwise each weight is divided by the sum.
///
/// Idempotent: normalizing an already-normalized triple returns it
/// unchanged up to floating tolerance.
pub fn normalize_weights(w_user: f64, w_timing: f64, w_context: f64) -> (f64, f64, f64) {
    let w_user = w_user.max(0.0);
    let w_timing = w_timing.max(0.0);
    let w_context = w_context.max(0.0);
    let sum = w_user + w_timing + w_context;
    if sum <= EPSILON {
        tracing::debug!("degenerate weight triple, falling back to defaults");
        return DEFAULT_WEIGHTS;
    }
    (w_user / sum, w_timing / sum, w_context / sum)
}
