//! Synonym groups keyed by a canonical root term.
//!
//! Serialized as a JSON object mapping each root to its synonym list:
//!
//! ```json
//! {
//!   "iade": ["geri odeme", "para iadesi", "iptal"],
//!   "kargo": ["teslimat", "gonderi"]
//! }
//! ```
//!
//! The root does not have to appear in its own list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from a canonical root term to its ordered synonym list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymGroups {
    groups: BTreeMap<String, Vec<String>>,
}

impl SynonymGroups {
    /// Create an empty set of groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the group for `root`.
    pub fn insert<R, I, S>(&mut self, root: R, synonyms: I)
    where
        R: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .insert(root.into(), synonyms.into_iter().map(Into::into).collect());
    }

    /// Iterate over `(root, synonyms)` pairs in root order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(root, synonyms)| (root.as_str(), synonyms.as_slice()))
    }

    /// Iterate over every group that `term` belongs to, either as the root or
    /// as one of the synonyms.
    pub fn groups_containing<'a>(
        &'a self,
        term: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [String])> + 'a {
        self.iter()
            .filter(move |(root, synonyms)| *root == term || synonyms.iter().any(|s| s == term))
    }

    /// Get the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<R, S> FromIterator<(R, Vec<S>)> for SynonymGroups
where
    R: Into<String>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (R, Vec<S>)>>(iter: T) -> Self {
        let mut groups = SynonymGroups::new();
        for (root, synonyms) in iter {
            groups.insert(root, synonyms);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_containing_root_and_member() {
        let groups: SynonymGroups = vec![
            ("iade", vec!["iptal", "geri"]),
            ("kargo", vec!["teslimat", "gonderi"]),
            ("iptal", vec!["vazgecmek"]),
        ]
        .into_iter()
        .collect();

        let roots: Vec<&str> = groups.groups_containing("iptal").map(|(r, _)| r).collect();
        assert_eq!(roots, vec!["iade", "iptal"]);

        let roots: Vec<&str> = groups.groups_containing("teslimat").map(|(r, _)| r).collect();
        assert_eq!(roots, vec!["kargo"]);

        assert_eq!(groups.groups_containing("fatura").count(), 0);
    }

    #[test]
    fn test_json_shape() {
        let groups: SynonymGroups =
            serde_json::from_str(r#"{"sifre": ["parola", "password"]}"#).unwrap();

        assert_eq!(groups.len(), 1);
        let entries: Vec<(&str, &[String])> = groups.iter().collect();
        assert_eq!(
            entries,
            vec![("sifre", &["parola".to_string(), "password".to_string()][..])]
        );
    }
}
