use crate::constants::{BAND_PASS_TAPS, LOW_PASS_TAPS};

/// Fixed-coefficient FIR filter applied window by window.
pub struct FirFilter {
    taps: &'static [f32],
}

impl FirFilter {
    pub fn new(taps: &'static [f32]) -> FirFilter {
        FirFilter { taps }
    }
    /// Low-pass over [LOW_PASS_TAPS].
    pub fn low_pass() -> FirFilter {
        FirFilter::new(&LOW_PASS_TAPS)
    }
    /// Band-pass over [BAND_PASS_TAPS].
    pub fn band_pass() -> FirFilter {
        FirFilter::new(&BAND_PASS_TAPS)
    }
    /// Convolves the window with the taps and trims the full convolution
    /// back to the input length, keeping the slice centered on the group
    /// delay of the filter. Output length always equals input length.
    pub fn filter(&self, window: &[f32]) -> Vec<f32> {
        let mut full = vec![0.0; window.len() + self.taps.len() - 1];
        for (i, sample) in window.iter().enumerate() {
            for (j, tap) in self.taps.iter().enumerate() {
                full[i + j] += sample * tap;
            }
        }
        let start = self.taps.len() / 2;
        full[start..start + window.len()].to_vec()
    }
}

/// Shifts every sample by the calibrated dc offset and low-pass filters
/// the result. Shared by the threshold training and classification paths.
pub(crate) fn preprocess(window: &[f32], offset: f32) -> Vec<f32> {
    let shifted: Vec<f32> = window.iter().map(|sample| sample - offset).collect();
    FirFilter::low_pass().filter(&shifted)
}

#[test]
fn filter_preserves_window_length() {
    let window = vec![1.0; crate::constants::WINDOW_SIZE];
    assert_eq!(FirFilter::low_pass().filter(&window).len(), window.len());
    assert_eq!(FirFilter::band_pass().filter(&window).len(), window.len());
}

#[test]
fn low_pass_has_unit_dc_gain() {
    let window = vec![1.0; crate::constants::WINDOW_SIZE];
    let filtered = FirFilter::low_pass().filter(&window);
    let gain: f32 = LOW_PASS_TAPS.iter().sum();
    // away from the window edges the convolution has settled
    assert!((filtered[75] - gain).abs() < 1e-4);
    assert!((gain - 1.0).abs() < 1e-4);
}

#[test]
fn trimming_aligns_output_with_input() {
    let mut window = vec![0.0; crate::constants::WINDOW_SIZE];
    window[75] = 1.0;
    let filtered = FirFilter::low_pass().filter(&window);
    // the impulse response peaks at the impulse position, not delayed
    assert_eq!(filtered[75], LOW_PASS_TAPS[7]);
}
