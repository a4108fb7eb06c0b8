use std::f32::consts::PI;
use std::fs::File;
use std::io::BufReader;

use voxgender::{
    read_wav_samples, Error, Gender, GenderDetector, CALIBRATION_WINDOWS, SAMPLE_RATE, WINDOW_SIZE,
};

/// Deterministic pseudo-noise in [-amplitude, amplitude].
fn noise(windows: usize, amplitude: i32, seed: u32) -> Vec<i32> {
    let mut state = seed;
    (0..windows * WINDOW_SIZE)
        .map(|_| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            let unit = (state >> 8) as f32 / (1 << 24) as f32;
            ((unit * 2.0 - 1.0) * amplitude as f32) as i32
        })
        .collect()
}

fn tone(windows: usize, frequency: f32, amplitude: f32) -> Vec<i32> {
    (0..windows * WINDOW_SIZE)
        .map(|n| {
            (amplitude * (2.0 * PI * frequency * n as f32 / SAMPLE_RATE as f32).sin()).round()
                as i32
        })
        .collect()
}

#[test]
fn it_classifies_a_male_then_a_female_tone() {
    simple_logger::SimpleLogger::new().init().ok();
    let mut samples = noise(CALIBRATION_WINDOWS, 50, 7);
    samples.extend(tone(5, 150.0, 1000.0));
    samples.extend(tone(5, 300.0, 1000.0));
    let results = GenderDetector::process(&samples).unwrap();
    assert_eq!(results.len(), 10);
    assert_eq!(results[..5], [Gender::Male; 5]);
    assert_eq!(results[5..], [Gender::Female; 5]);
}

#[test]
fn it_emits_nothing_for_a_calibration_only_recording() {
    // ten windows plus a trailing partial one, which is dropped
    let mut samples = noise(CALIBRATION_WINDOWS, 50, 1);
    samples.extend(vec![25; WINDOW_SIZE / 2]);
    let results = GenderDetector::process(&samples).unwrap();
    assert!(results.is_empty());
}

#[test]
fn it_fails_fast_on_short_recordings() {
    let samples = noise(5, 50, 1);
    match GenderDetector::process(&samples) {
        Err(Error::InsufficientData { windows }) => assert_eq!(windows, 5),
        other => panic!("expected insufficient data, got {:?}", other),
    }
}

#[test]
fn noise_at_the_calibration_scale_stays_unknown() {
    // same amplitude as the training noise: windows straddle the energy
    // threshold, and the ones that pass the voicing gates are never
    // periodic, so both rejection paths end in unknown
    for (calibration_seed, signal_seed) in [(3, 5), (23, 29)] {
        let mut samples = noise(CALIBRATION_WINDOWS, 50, calibration_seed);
        samples.extend(noise(10, 50, signal_seed));
        let results = GenderDetector::process(&samples).unwrap();
        assert_eq!(results, vec![Gender::Unknown; 10]);
    }
}

#[test]
fn quiet_noise_after_calibration_stays_unknown() {
    // well below the energy threshold trained on louder noise
    let mut samples = noise(CALIBRATION_WINDOWS, 200, 3);
    samples.extend(noise(5, 10, 11));
    let results = GenderDetector::process(&samples).unwrap();
    assert_eq!(results, vec![Gender::Unknown; 5]);
}

#[test]
fn high_zero_crossing_rate_is_rejected() {
    // a 3 kHz tone crosses zero far more often than the calibration noise
    let mut samples = noise(CALIBRATION_WINDOWS, 50, 19);
    samples.extend(tone(5, 3000.0, 2000.0));
    let results = GenderDetector::process(&samples).unwrap();
    assert_eq!(results, vec![Gender::Unknown; 5]);
}

#[test]
fn it_processes_wav_input() {
    let mut samples = noise(CALIBRATION_WINDOWS, 50, 13);
    samples.extend(tone(5, 150.0, 1000.0));
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let path = std::env::temp_dir().join("voxgender_male_tone.wav");
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for sample in &samples {
        writer.write_sample(*sample as i16).unwrap();
    }
    writer.finalize().unwrap();

    let read = read_wav_samples(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!(read, samples);
    let results = GenderDetector::process(&read).unwrap();
    assert_eq!(results, vec![Gender::Male; 5]);
}
