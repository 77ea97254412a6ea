//! Sentiment adapters. Models implement SentimentModelPort; the CSV log implements
//! SentimentSinkPort.

pub mod csv_sink;
pub mod hf_model;
pub mod lexicon_model;

pub use csv_sink::CsvSentimentSink;
pub use hf_model::HfInferenceModel;
pub use lexicon_model::LexiconModel;
