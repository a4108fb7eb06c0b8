use crate::audio::preprocess;
use crate::constants::{OFFSET_CALIBRATION_WINDOWS, THRESHOLD_CALIBRATION_WINDOWS, WINDOW_SIZE};
use crate::voicing::{signal_energy, zero_crossing_rate};

/// Offset and voicing thresholds derived from the training windows.
/// Finalized once per run and read-only afterwards, so classifying with it
/// is a pure function of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationState {
    /// Dc level of the capture chain, subtracted from every sample.
    pub offset: f32,
    /// Minimum signal energy for a window to count as voiced.
    pub energy_threshold: f32,
    /// Maximum zero crossing rate for a window to count as voiced.
    pub zcr_threshold: f32,
}

/// Derives a [CalibrationState] from the opening windows of a recording.
///
/// The first five windows estimate the dc offset as the mean of the
/// per-window means. The next five are offset-corrected, low-pass filtered
/// and measured: signal energy accumulates as a running average and the
/// zero crossing rate as a plain mean. The state is returned on the last
/// training window.
pub struct Calibrator {
    window_means: Vec<f32>,
    offset: f32,
    energy_avg: f32,
    zcr_sum: f32,
    fed: usize,
}

impl Calibrator {
    pub fn new() -> Calibrator {
        Calibrator {
            window_means: Vec::with_capacity(OFFSET_CALIBRATION_WINDOWS),
            offset: 0.0,
            energy_avg: 0.0,
            zcr_sum: 0.0,
            fed: 0,
        }
    }
    /// Consumes the next training window in sequence.
    pub fn feed(&mut self, window: &[f32]) -> Option<CalibrationState> {
        debug_assert_eq!(window.len(), WINDOW_SIZE);
        if self.fed < OFFSET_CALIBRATION_WINDOWS {
            let mean = window.iter().sum::<f32>() / window.len() as f32;
            self.window_means.push(mean);
            self.fed += 1;
            if self.fed == OFFSET_CALIBRATION_WINDOWS {
                self.offset = self.window_means.iter().sum::<f32>()
                    / OFFSET_CALIBRATION_WINDOWS as f32;
            }
            None
        } else {
            let filtered = preprocess(window, self.offset);
            let k = (self.fed - OFFSET_CALIBRATION_WINDOWS) as f32;
            self.energy_avg = (self.energy_avg * k + signal_energy(&filtered)) / (k + 1.0);
            self.zcr_sum += zero_crossing_rate(&filtered) as f32;
            self.fed += 1;
            if self.fed == OFFSET_CALIBRATION_WINDOWS + THRESHOLD_CALIBRATION_WINDOWS {
                Some(CalibrationState {
                    offset: self.offset,
                    energy_threshold: self.energy_avg,
                    zcr_threshold: self.zcr_sum / THRESHOLD_CALIBRATION_WINDOWS as f32,
                })
            } else {
                None
            }
        }
    }
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new()
    }
}
