use std::fmt;

/// Classification emitted for every window after calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Gender {
    /// Noise, unvoiced speech, a non-periodic window, or a pitch outside
    /// both gender bands.
    Unknown = 0,
    Male = 1,
    Female = 2,
}

impl Gender {
    /// Integer code used at the output boundary.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Unknown => write!(f, "unknown"),
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// An exclusive fundamental frequency range mapped to a gender.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyBand {
    pub gender: Gender,
    pub low_hz: f32,
    pub high_hz: f32,
}

/// Typical fundamental frequency ranges of adult speakers. The 175-190 Hz
/// gap between the bands is left unclassified on purpose.
pub const GENDER_BANDS: [FrequencyBand; 2] = [
    FrequencyBand {
        gender: Gender::Male,
        low_hz: 101.0,
        high_hz: 175.0,
    },
    FrequencyBand {
        gender: Gender::Female,
        low_hz: 190.0,
        high_hz: 400.0,
    },
];

/// Maps a fundamental frequency to a gender. Band bounds are exclusive;
/// every frequency outside [GENDER_BANDS], including 0 for non-periodic
/// windows, stays unknown. Windows are classified independently, with no
/// hysteresis across them.
pub fn classify(frequency: f32) -> Gender {
    GENDER_BANDS
        .iter()
        .find(|band| band.low_hz < frequency && frequency < band.high_hz)
        .map(|band| band.gender)
        .unwrap_or(Gender::Unknown)
}
