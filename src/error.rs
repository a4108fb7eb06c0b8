use std::fmt;

use crate::constants::CALIBRATION_WINDOWS;

/// Failures the pipeline does not recover from. No partial output is
/// produced when one of these is returned.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The input provider could not be opened or decoded.
    SourceUnavailable(String),
    /// The recording holds fewer windows than calibration consumes.
    InsufficientData { windows: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceUnavailable(msg) => write!(f, "input source unavailable: {}", msg),
            Error::InsufficientData { windows } => write!(
                f,
                "calibration needs {} windows, the input holds {}",
                CALIBRATION_WINDOWS, windows
            ),
        }
    }
}

impl std::error::Error for Error {}
