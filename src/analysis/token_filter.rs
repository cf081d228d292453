//! Token filters drop or keep tokens after tokenization.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stopwords

pub mod stop;
