//! Tokenizers run after normalization and break the normalized text into
//! tokens.
//!
//! # Available Tokenizers
//!
//! - [`space::SpaceTokenizer`] - Splits on single ASCII spaces, dropping empty pieces

pub mod space;
