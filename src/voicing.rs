use crate::calibration::CalibrationState;
use crate::constants::ENERGY_TERM_FLOOR;

/// Signal energy of a preprocessed window: the sum of per-sample log-power
/// terms `10*log10(sample^2)`. A sample of exactly zero makes its term
/// -inf, so non-finite terms are clamped to [ENERGY_TERM_FLOOR] and the
/// sum stays a well-defined real value.
pub fn signal_energy(window: &[f32]) -> f32 {
    window
        .iter()
        .map(|sample| (10.0 * (sample * sample).log10()).max(ENERGY_TERM_FLOOR))
        .sum()
}

/// Count of sign transitions between consecutive samples. A transition is
/// one sample >= 0 against a neighbor < 0, in either direction; zero
/// counts as positive rather than as its own sign.
pub fn zero_crossing_rate(window: &[f32]) -> usize {
    window
        .windows(2)
        .filter(|pair| (pair[0] >= 0.0) != (pair[1] >= 0.0))
        .count()
}

/// Voiced speech carries high energy and a low zero crossing rate relative
/// to the calibrated thresholds. Both comparisons are inclusive.
pub fn is_voiced(signal_energy: f32, zero_crossing_rate: usize, state: &CalibrationState) -> bool {
    signal_energy >= state.energy_threshold
        && zero_crossing_rate as f32 <= state.zcr_threshold
}
