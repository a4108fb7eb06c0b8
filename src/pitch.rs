use crate::audio::FirFilter;
use crate::constants::{PERIODICITY_TOLERANCE, SAMPLE_RATE};

/// Extracts the fundamental frequency of a voiced window from the lags of
/// its dominant autocorrelation peaks.
pub struct PitchExtractor {
    band_pass: FirFilter,
}

impl PitchExtractor {
    pub fn new() -> PitchExtractor {
        PitchExtractor {
            band_pass: FirFilter::band_pass(),
        }
    }
    /// Returns the fundamental frequency in Hz, or 0.0 when the window is
    /// not periodic. Expects an offset-corrected, low-pass filtered
    /// window; the band-pass is applied here, the low-pass never again.
    ///
    /// The frequency is quantized to whole Hz: the period resolution is
    /// one lag sample, so finer precision would be fictitious.
    pub fn extract(&self, window: &[f32]) -> f32 {
        let centered = self.band_pass.filter(window);
        let correlation = autocorrelate(&centered);
        match find_period(&correlation) {
            Some(period) => (SAMPLE_RATE / period) as f32,
            None => 0.0,
        }
    }
}

impl Default for PitchExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Autocorrelation over non-negative lags only; the negative half is
/// symmetric and carries no extra information.
fn autocorrelate(window: &[f32]) -> Vec<f32> {
    (0..window.len())
        .map(|lag| {
            window[..window.len() - lag]
                .iter()
                .zip(&window[lag..])
                .map(|(a, b)| a * b)
                .sum()
        })
        .collect()
}

/// Single-pass scan of the interior lags for the two largest local maxima.
/// `second` only accepts maxima strictly below the current `largest`, so a
/// candidate accepted early survives even when a bigger peak supersedes
/// `largest` later in the scan. The periodicity test depends on that
/// ordering, so it must not be replaced by a true two-best selection.
///
/// The window is periodic when the second peak sits one fundamental lag
/// past the first, within a fixed tolerance; the first lag is then the
/// period in samples.
fn find_period(correlation: &[f32]) -> Option<usize> {
    let mut largest = 0.0;
    let mut largest_lag = 1;
    let mut second = 0.0;
    let mut second_lag = 1;
    for i in 1..correlation.len() - 1 {
        if correlation[i] >= correlation[i - 1] && correlation[i] >= correlation[i + 1] {
            if correlation[i] > largest {
                largest = correlation[i];
                largest_lag = i;
            }
            if correlation[i] > second && correlation[i] < largest {
                second = correlation[i];
                second_lag = i;
            }
        }
    }
    let spread = second_lag as i32 - 2 * largest_lag as i32;
    if spread.abs() <= PERIODICITY_TOLERANCE {
        Some(largest_lag)
    } else {
        None
    }
}
