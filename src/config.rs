//! Matching rules configuration.
//!
//! Rules are read from a JSON object with camelCase keys. Every key is
//! optional; missing or `null` collections are empty.
//!
//! ```json
//! {
//!   "minScore": 2,
//!   "language": "tr",
//!   "normalize": true,
//!   "stopwords": ["ve", "bir", "ne"],
//!   "synonymGroups": { "iade": ["iptal", "geri odeme"] }
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use faq_matcher::config::RulesConfig;
//!
//! let config = RulesConfig::from_json_str(r#"{"minScore": 3}"#).unwrap();
//! assert_eq!(config.min_score, 3);
//! assert!(config.normalize);
//! assert!(config.stopwords.is_empty());
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::Normalizer;
use crate::error::{FaqMatcherError, Result};
use crate::synonym::SynonymGroups;
use crate::util::null_as_default;

/// Default minimum score: one exact keyword match.
pub const DEFAULT_MIN_SCORE: u32 = 2;

/// Default locale tag.
pub const DEFAULT_LANGUAGE: &str = "tr";

/// Rules that drive normalization, filtering and the match threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesConfig {
    /// Inclusive score threshold for the best-match query
    pub min_score: u32,

    /// Locale tag; informational only
    pub language: String,

    /// Enables diacritic folding and punctuation stripping
    pub normalize: bool,

    /// Tokens dropped after normalization, already in normalized form.
    /// Shared with every analyzer built from this configuration.
    #[serde(deserialize_with = "null_as_default")]
    pub stopwords: Arc<HashSet<String>>,

    /// Root → synonyms mapping used for keyword expansion
    #[serde(deserialize_with = "null_as_default")]
    pub synonym_groups: SynonymGroups,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            min_score: DEFAULT_MIN_SCORE,
            language: DEFAULT_LANGUAGE.to_string(),
            normalize: true,
            stopwords: Arc::default(),
            synonym_groups: SynonymGroups::new(),
        }
    }
}

impl RulesConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| FaqMatcherError::config(format!("Failed to parse rules config: {e}")))
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FaqMatcherError::config(format!(
                "Failed to read rules config '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_json_str(&content).map_err(|e| e.with_path(path))?;

        tracing::debug!(
            path = %path.display(),
            min_score = config.min_score,
            stopwords = config.stopwords.len(),
            synonym_groups = config.synonym_groups.len(),
            "loaded rules config"
        );

        Ok(config)
    }

    /// The normalization strategy selected by the `normalize` flag.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::from_flag(self.normalize)
    }

    /// Set the minimum score.
    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Set the language tag.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    /// Enable or disable folding normalization.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Replace the stopword set.
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Arc::new(stopwords.into_iter().map(Into::into).collect());
        self
    }

    /// Add or replace one synonym group.
    pub fn with_synonym_group<R, I, S>(mut self, root: R, synonyms: I) -> Self
    where
        R: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonym_groups.insert(root, synonyms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.min_score, 2);
        assert_eq!(config.language, "tr");
        assert!(config.normalize);
        assert_eq!(config.normalizer(), Normalizer::Folding);
    }

    #[test]
    fn test_full_json() {
        let config = RulesConfig::from_json_str(
            r#"{
                "minScore": 3,
                "language": "tr-TR",
                "normalize": false,
                "stopwords": ["ve", "bir"],
                "synonymGroups": {"iade": ["iptal"]}
            }"#,
        )
        .unwrap();

        assert_eq!(config.min_score, 3);
        assert_eq!(config.language, "tr-TR");
        assert!(!config.normalize);
        assert!(config.stopwords.contains("ve"));
        let groups: Vec<(&str, &[String])> = config.synonym_groups.iter().collect();
        assert_eq!(groups, vec![("iade", &["iptal".to_string()][..])]);
    }

    #[test]
    fn test_null_collections_are_empty() {
        let config =
            RulesConfig::from_json_str(r#"{"stopwords": null, "synonymGroups": null}"#).unwrap();
        assert!(config.stopwords.is_empty());
        assert!(config.synonym_groups.is_empty());
        assert_eq!(config.min_score, DEFAULT_MIN_SCORE);
    }

    #[test]
    fn test_negative_min_score_is_rejected() {
        let err = RulesConfig::from_json_str(r#"{"minScore": -1}"#).unwrap_err();
        assert!(matches!(err, FaqMatcherError::Config(_)));
    }

    #[test]
    fn test_file_errors_name_the_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(&path, r#"{"minScore": "high"}"#).unwrap();

        let err = RulesConfig::from_file(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Config error: Failed to parse rules config:"));
        assert!(message.contains("rules.json"));
    }

    #[test]
    fn test_builder() {
        let config = RulesConfig::default()
            .with_min_score(5)
            .with_language("en")
            .with_stopwords(vec!["the"])
            .with_synonym_group("refund", vec!["return"]);

        assert_eq!(config.min_score, 5);
        assert_eq!(config.language, "en");
        assert!(config.stopwords.contains("the"));
        assert_eq!(config.synonym_groups.len(), 1);
    }
}
