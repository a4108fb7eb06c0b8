#[macro_use]
extern crate bencher;

use std::f32::consts::PI;

use bencher::Bencher;
use voxgender::{GenderDetector, CALIBRATION_WINDOWS, SAMPLE_RATE, WINDOW_SIZE};

fn classify_recording(bench: &mut Bencher) {
    // calibration noise followed by a sustained voiced tone
    let mut state = 42u32;
    let mut samples: Vec<i32> = (0..CALIBRATION_WINDOWS * WINDOW_SIZE)
        .map(|_| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            ((state >> 8) as f32 / (1 << 24) as f32 * 100.0 - 50.0) as i32
        })
        .collect();
    samples.extend((0..90 * WINDOW_SIZE).map(|n| {
        (1000.0 * (2.0 * PI * 150.0 * n as f32 / SAMPLE_RATE as f32).sin()) as i32
    }));
    bench.iter(|| GenderDetector::process(&samples).unwrap());
}

benchmark_group!(benches, classify_recording);
benchmark_main!(benches);
