//! numtag - deterministic tagger for numeric entities.
//!
//! Assigns NUMBER, DATE, TIME, MONEY and ORDINAL labels to a token sequence
//! that has already been tokenized and part-of-speech tagged. The tagger is a
//! single forward pass over an ordered rule table; some rules relabel tokens
//! that were already visited.

pub mod classifier;
pub mod config;
pub mod document;
pub mod error;
pub mod padded;
pub mod patterns;
mod rules;
pub mod spans;
pub mod token;

pub use classifier::{pretag, NumberClassifier};
pub use config::{Config, Tagset};
pub use document::{read_sentences, write_sentences, InputFormat, OutputFormat};
pub use error::NumtagError;
pub use spans::{spans, EntitySpan};
pub use token::{Category, Token};
