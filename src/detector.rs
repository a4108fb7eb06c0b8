#[cfg(feature = "log")]
use log::debug;

use crate::audio::preprocess;
use crate::calibration::{CalibrationState, Calibrator};
use crate::classifier::{classify, Gender};
use crate::constants::{CALIBRATION_WINDOWS, WINDOW_SIZE};
use crate::error::Error;
use crate::pitch::PitchExtractor;
use crate::voicing::{is_voiced, signal_energy, zero_crossing_rate};

enum Phase {
    Calibrating(Calibrator),
    Classifying(CalibrationState),
}

/// Sequences calibration and per-window classification over a recording.
///
/// The first [CALIBRATION_WINDOWS] windows train the detector and emit no
/// result; every window after them yields one [Gender]. The transition is
/// strictly forward: windows are never revisited and calibration never
/// reruns once classification has begun.
pub struct GenderDetector {
    pitch: PitchExtractor,
    phase: Phase,
}

impl GenderDetector {
    pub fn new() -> GenderDetector {
        GenderDetector {
            pitch: PitchExtractor::new(),
            phase: Phase::Calibrating(Calibrator::new()),
        }
    }

    /// Classifies a whole recording at once. Trailing samples that do not
    /// fill a window are dropped. Returns one gender per window after the
    /// calibration ones, in window order, or [Error::InsufficientData]
    /// when the recording is too short to calibrate on.
    pub fn process(samples: &[i32]) -> Result<Vec<Gender>, Error> {
        let windows: Vec<Vec<f32>> = samples
            .chunks_exact(WINDOW_SIZE)
            .map(|chunk| chunk.iter().map(|sample| *sample as f32).collect())
            .collect();
        if windows.len() < CALIBRATION_WINDOWS {
            return Err(Error::InsufficientData {
                windows: windows.len(),
            });
        }
        let mut detector = GenderDetector::new();
        Ok(windows
            .iter()
            .filter_map(|window| detector.process_window(window))
            .collect())
    }

    /// Feeds the next window in sequence. Returns [None] while the
    /// detector is still calibrating.
    pub fn process_window(&mut self, window: &[f32]) -> Option<Gender> {
        assert_eq!(window.len(), WINDOW_SIZE, "window size mismatch");
        match &mut self.phase {
            Phase::Calibrating(calibrator) => {
                if let Some(state) = calibrator.feed(window) {
                    #[cfg(feature = "log")]
                    debug!(
                        "calibration done: offset {} energy threshold {} zcr threshold {}",
                        state.offset, state.energy_threshold, state.zcr_threshold
                    );
                    self.phase = Phase::Classifying(state);
                }
                None
            }
            Phase::Classifying(state) => {
                let state = *state;
                Some(self.classify_window(window, &state))
            }
        }
    }

    /// Runs the per-window pipeline against a finalized calibration. Pure:
    /// the same window and state always produce the same result, so
    /// windows may be classified in any order or in parallel.
    pub fn classify_window(&self, window: &[f32], state: &CalibrationState) -> Gender {
        let filtered = preprocess(window, state.offset);
        let energy = signal_energy(&filtered);
        let crossings = zero_crossing_rate(&filtered);
        if !is_voiced(energy, crossings, state) {
            #[cfg(feature = "log")]
            debug!("window not voiced: se {} zcr {}", energy, crossings);
            return Gender::Unknown;
        }
        classify(self.pitch.extract(&filtered))
    }

    /// The state derived from the training windows, once calibration has
    /// finished.
    pub fn calibration(&self) -> Option<&CalibrationState> {
        match &self.phase {
            Phase::Calibrating(_) => None,
            Phase::Classifying(state) => Some(state),
        }
    }
}

impl Default for GenderDetector {
    fn default() -> Self {
        Self::new()
    }
}
