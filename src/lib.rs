mod audio;
mod calibration;
mod classifier;
mod constants;
mod detector;
mod error;
mod pitch;
mod voicing;
pub use audio::read_text_samples;
pub use audio::read_wav_samples;
pub use audio::FirFilter;
pub use calibration::CalibrationState;
pub use calibration::Calibrator;
pub use classifier::{classify, FrequencyBand, Gender, GENDER_BANDS};
pub use constants::{
    BAND_PASS_TAPS, CALIBRATION_WINDOWS, LOW_PASS_TAPS, SAMPLE_RATE, WINDOW_SIZE,
};
pub use detector::GenderDetector;
pub use error::Error;
pub use pitch::PitchExtractor;
pub use voicing::{is_voiced, signal_energy, zero_crossing_rate};
