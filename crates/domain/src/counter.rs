//! Counter animation curve for the statistics panel.
//!
//! Counters count up from zero with a cubic ease-out and always land on the
//! exact target, whatever the frame timing.

/// Total animation time.
pub const DURATION_MS: u32 = 1_500;

/// Interval between animation frames: 60 frames per run.
pub const FRAME_MS: u32 = 25;

/// Value displayed `elapsed_ms` into an animation towards `target`.
#[must_use]
pub fn value_at(target: u64, elapsed_ms: u32, duration_ms: u32) -> u64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = f64::from(elapsed_ms) / f64::from(duration_ms);
    let eased = 1.0 - (1.0 - progress).powi(3);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = (target as f64 * eased).floor() as u64;
    value.min(target)
}

/// Every value shown by one animation run, ending on `target`.
///
/// One entry per frame, repeats included, so playing them back at `frame_ms`
/// takes the full `duration_ms` whatever the target.
#[must_use]
pub fn frames(target: u64, duration_ms: u32, frame_ms: u32) -> Vec<u64> {
    let frame_ms = frame_ms.max(1);
    let mut values: Vec<u64> = (0..duration_ms)
        .step_by(frame_ms as usize)
        .map(|elapsed| value_at(target, elapsed, duration_ms))
        .collect();
    values.push(target);
    values
}
