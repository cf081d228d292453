//! FAQ records and catalogs.
//!
//! FAQs are owned by an external repository; this crate only reads them. A
//! catalog file is a JSON array of records in camelCase:
//!
//! ```json
//! [
//!   {
//!     "id": "faq-1",
//!     "question": "Siparişim ne zaman kargoya verilir?",
//!     "answer": "Siparişler 1-2 iş günü içinde kargoya verilir.",
//!     "keywords": ["kargo", "siparis"],
//!     "category": "Kargo ve Teslimat",
//!     "clickCount": 42,
//!     "createdAt": "2024-01-15T10:00:00Z",
//!     "updatedAt": "2024-02-01T08:30:00Z"
//!   }
//! ]
//! ```
//!
//! Records missing `keywords` (or carrying `null`) are read with an empty
//! keyword list instead of being rejected.

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FaqMatcherError, Result};
use crate::util::null_as_default;

/// A question/answer record, the target of matching.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    /// Identity of the record
    pub id: String,

    /// Question text shown to the user
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,

    /// Answer text shown to the user
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,

    /// Keywords in authoring order; may contain duplicates
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,

    /// Free-text category label
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,

    /// Number of times the answer was opened
    #[serde(default, deserialize_with = "null_as_default")]
    pub click_count: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Faq {
    /// Create a new FAQ with the given id, question and answer.
    pub fn new<I, Q, A>(id: I, question: Q, answer: A) -> Self
    where
        I: Into<String>,
        Q: Into<String>,
        A: Into<String>,
    {
        Faq {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            ..Default::default()
        }
    }

    /// Set the keywords.
    pub fn with_keywords<K, S>(mut self, keywords: K) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the category.
    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = category.into();
        self
    }
}

/// An ordered collection of FAQs.
///
/// Catalog order is significant: FAQs with equal scores rank in the order
/// they appear here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqCatalog {
    faqs: Vec<Faq>,
}

impl FaqCatalog {
    /// Create a catalog from FAQs, keeping their order.
    pub fn new(faqs: Vec<Faq>) -> Self {
        FaqCatalog { faqs }
    }

    /// Parse a catalog from a JSON array.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let faqs: Vec<Faq> = serde_json::from_str(json)
            .map_err(|e| FaqMatcherError::catalog(format!("Failed to parse FAQ catalog: {e}")))?;
        Ok(Self::new(faqs))
    }

    /// Load a catalog from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FaqMatcherError::catalog(format!(
                "Failed to read FAQ catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        let catalog = Self::from_json_str(&content).map_err(|e| e.with_path(path))?;
        let duplicates = catalog.duplicate_ids();
        if !duplicates.is_empty() {
            tracing::warn!(
                path = %path.display(),
                ?duplicates,
                "FAQ catalog contains duplicate ids"
            );
        }
        tracing::debug!(path = %path.display(), faqs = catalog.len(), "loaded FAQ catalog");

        Ok(catalog)
    }

    /// Get the FAQs as a slice, in catalog order.
    pub fn as_slice(&self) -> &[Faq] {
        &self.faqs
    }

    /// Find an FAQ by id. With duplicate ids the first one wins.
    pub fn get(&self, id: &str) -> Option<&Faq> {
        self.faqs.iter().find(|faq| faq.id == id)
    }

    /// Ids that appear more than once, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = AHashSet::new();
        let mut duplicates = Vec::new();
        for faq in &self.faqs {
            if !seen.insert(faq.id.as_str()) && !duplicates.contains(&faq.id.as_str()) {
                duplicates.push(faq.id.as_str());
            }
        }
        duplicates
    }

    /// Get the number of FAQs.
    pub fn len(&self) -> usize {
        self.faqs.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.faqs.is_empty()
    }

    /// Iterate over the FAQs in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Faq> {
        self.faqs.iter()
    }
}

impl From<Vec<Faq>> for FaqCatalog {
    fn from(faqs: Vec<Faq>) -> Self {
        Self::new(faqs)
    }
}

impl<'a> IntoIterator for &'a FaqCatalog {
    type Item = &'a Faq;
    type IntoIter = std::slice::Iter<'a, Faq>;

    fn into_iter(self) -> Self::IntoIter {
        self.faqs.iter()
    }
}
