use std::io::{BufRead, BufReader, Read};

use hound::{SampleFormat, WavReader};

use crate::error::Error;

/// Reads every sample of a wav source as integer amplitudes. Float wav
/// data is rescaled to the 16 bit integer range, multi-channel audio is
/// reduced to its first channel.
pub fn read_wav_samples<R: Read>(buffer_reader: BufReader<R>) -> Result<Vec<i32>, Error> {
    let wav_reader =
        WavReader::new(buffer_reader).map_err(|err| Error::SourceUnavailable(err.to_string()))?;
    let channels = wav_reader.spec().channels as usize;
    let samples = match wav_reader.spec().sample_format {
        SampleFormat::Int => wav_reader
            .into_samples::<i32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| Error::SourceUnavailable(err.to_string()))?,
        SampleFormat::Float => wav_reader
            .into_samples::<f32>()
            .map(|sample| sample.map(|value| (value * i16::MAX as f32) as i32))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| Error::SourceUnavailable(err.to_string()))?,
    };
    Ok(samples
        .chunks_exact(channels)
        .map(|frame| frame[0])
        .collect())
}

/// Reads whitespace-separated integer amplitudes from a plain text source,
/// one or more per line.
pub fn read_text_samples<R: Read>(buffer_reader: BufReader<R>) -> Result<Vec<i32>, Error> {
    let mut samples = Vec::new();
    for line in buffer_reader.lines() {
        let line = line.map_err(|err| Error::SourceUnavailable(err.to_string()))?;
        for token in line.split_whitespace() {
            let value = token.parse::<i32>().map_err(|err| {
                Error::SourceUnavailable(format!("bad amplitude {:?}: {}", token, err))
            })?;
            samples.push(value);
        }
    }
    Ok(samples)
}

#[test]
fn it_reads_text_amplitudes() {
    let source = "12\n-3\n0\n7 8\n";
    let samples = read_text_samples(BufReader::new(source.as_bytes())).unwrap();
    assert_eq!(samples, vec![12, -3, 0, 7, 8]);
}

#[test]
fn it_rejects_malformed_text_amplitudes() {
    let source = "12\nnot-a-number\n";
    let result = read_text_samples(BufReader::new(source.as_bytes()));
    assert!(matches!(result, Err(Error::SourceUnavailable(_))));
}

#[test]
fn it_rejects_non_wav_sources() {
    let source = b"definitely not a riff header";
    let result = read_wav_samples(BufReader::new(&source[..]));
    assert!(matches!(result, Err(Error::SourceUnavailable(_))));
}
