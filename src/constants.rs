/// Sampling rate the pipeline is designed for, in Hz.
pub const SAMPLE_RATE: usize = 10000;
/// Samples per analysis window (15ms at [SAMPLE_RATE]).
pub const WINDOW_SIZE: usize = 150;
/// Windows consumed for training before any classification is emitted.
pub const CALIBRATION_WINDOWS: usize = OFFSET_CALIBRATION_WINDOWS + THRESHOLD_CALIBRATION_WINDOWS;
/// Windows averaged to estimate the dc offset of the capture chain.
pub(crate) const OFFSET_CALIBRATION_WINDOWS: usize = 5;
/// Windows averaged to estimate the voicing decision thresholds.
pub(crate) const THRESHOLD_CALIBRATION_WINDOWS: usize = 5;
/// Substitute for a per-sample log-power term when the sample is exactly
/// zero, where 10*log10(0) would be -inf. Below any term a non-zero f32
/// sample can produce, so the window energy stays a finite real value.
pub(crate) const ENERGY_TERM_FLOOR: f32 = -1000.0;
/// Max distance, in lag samples, between the doubled fundamental lag and
/// the second peak lag for a window to count as periodic.
pub(crate) const PERIODICITY_TOLERANCE: i32 = 5;

/// 15-tap FIR low-pass, ~3500 Hz cutoff at [SAMPLE_RATE]. Strips
/// high-frequency noise ahead of the voicing features.
pub const LOW_PASS_TAPS: [f32; 15] = [
    0.001121705747,
    0.003906643018,
    -0.01608382165,
    0.0204258766,
    0.0210157074,
    -0.1248775125,
    0.2452525347,
    0.6984777451,
    0.2452525347,
    -0.1248775125,
    0.0210157074,
    0.0204258766,
    -0.01608382165,
    0.003906643018,
    0.001121705747,
];

/// 31-tap FIR band-pass, ~100-900 Hz passband at [SAMPLE_RATE]. Centers a
/// voiced window on its fundamental before autocorrelation.
pub const BAND_PASS_TAPS: [f32; 31] = [
    3.023164969e-19,
    0.0005073816283,
    0.0004706283216,
    -0.0009834705852,
    -0.005124626681,
    -0.01263490878,
    -0.02246246487,
    -0.03121165,
    -0.03363485634,
    -0.0243132785,
    3.200776042e-17,
    0.03834588081,
    0.08483161777,
    0.1297538131,
    0.1623560637,
    0.1742735952,
    0.1623560637,
    0.1297538131,
    0.08483161777,
    0.03834588081,
    3.200776042e-17,
    -0.0243132785,
    -0.03363485634,
    -0.03121165,
    -0.02246246487,
    -0.01263490878,
    -0.005124626681,
    -0.0009834705852,
    0.0004706283216,
    0.0005073816283,
    3.023164969e-19,
];
