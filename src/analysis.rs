//! Text analysis module for faq-matcher.
//!
//! This module turns free-text messages into the token sequence the matcher
//! scores: normalization (char filters), tokenization and stopword removal.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token_filter;
pub mod tokenizer;
