mod fir_filter;
mod sample_reader;
pub use fir_filter::FirFilter;
pub(crate) use fir_filter::preprocess;
pub use sample_reader::{read_text_samples, read_wav_samples};
