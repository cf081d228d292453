//! Error types for the faq-matcher library.
//!
//! All fallible operations return [`FaqMatcherError`] through the crate-wide
//! [`Result`] alias. The matching core itself never fails; errors come from
//! loading configuration and catalogs, from the caller-side fallback
//! generator and from the CLI.
//!
//! # Examples
//!
//! ```
//! use faq_matcher::error::{FaqMatcherError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(FaqMatcherError::config("minScore must be an integer"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::Path;

use thiserror::Error;

/// The main error type for faq-matcher operations.
#[derive(Error, Debug)]
pub enum FaqMatcherError {
    /// I/O errors (reading config, catalog or message files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rules configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// FAQ catalog errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The fallback answer generator failed
    #[error("Generation error: {0}")]
    Generation(String),

    /// An operation ran past its deadline
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Errors raised with `anyhow` context at the CLI boundary; the whole
    /// context chain is displayed
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FaqMatcherError.
pub type Result<T> = std::result::Result<T, FaqMatcherError>;

impl FaqMatcherError {
    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FaqMatcherError::Config(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        FaqMatcherError::Catalog(msg.into())
    }

    /// Create a new generation error.
    pub fn generation<S: Into<String>>(msg: S) -> Self {
        FaqMatcherError::Generation(msg.into())
    }

    /// Create a new timeout error.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        FaqMatcherError::Timeout(msg.into())
    }

    /// Attach the file a config or catalog error came from.
    ///
    /// Other variants are returned unchanged.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            FaqMatcherError::Config(msg) => {
                FaqMatcherError::Config(format!("{msg} (in '{}')", path.display()))
            }
            FaqMatcherError::Catalog(msg) => {
                FaqMatcherError::Catalog(format!("{msg} (in '{}')", path.display()))
            }
            other => other,
        }
    }
}
