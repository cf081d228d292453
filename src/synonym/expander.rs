//! Per-FAQ keyword expansion through synonym groups.
//!
//! The expanded set of an FAQ starts with its own keywords. For every keyword
//! that is the root of a group, or one of the group's synonyms, the root and
//! all of that group's synonyms are added.
//!
//! Expanded sets borrow their strings from the FAQ and from the synonym
//! groups, so building one allocates only the hash set itself.
//!
//! # Examples
//!
//! ```
//! use faq_matcher::synonym::{SynonymGroups, expand_keywords};
//!
//! let mut groups = SynonymGroups::new();
//! groups.insert("kargo", vec!["teslimat", "gonderi"]);
//!
//! let keywords = vec!["teslimat".to_string(), "sure".to_string()];
//! let expanded = expand_keywords(&keywords, &groups);
//!
//! assert!(expanded.contains("kargo"));
//! assert!(expanded.contains("gonderi"));
//! assert!(expanded.contains("sure"));
//! assert_eq!(expanded.len(), 4);
//! ```

use ahash::{AHashMap, AHashSet};

use crate::synonym::groups::SynonymGroups;

/// The unordered set of terms an FAQ answers to after synonym expansion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedKeywords<'a> {
    terms: AHashSet<&'a str>,
}

impl<'a> ExpandedKeywords<'a> {
    /// Check if a term is in the expanded set.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Get the number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Expand a keyword list through the synonym groups.
pub fn expand_keywords<'a>(keywords: &'a [String], groups: &'a SynonymGroups) -> ExpandedKeywords<'a> {
    let mut terms: AHashSet<&'a str> = keywords.iter().map(String::as_str).collect();

    for keyword in keywords {
        for (root, synonyms) in groups.groups_containing(keyword) {
            terms.insert(root);
            terms.extend(synonyms.iter().map(String::as_str));
        }
    }

    ExpandedKeywords { terms }
}

/// Expands keyword lists for one matching call, memoizing by keyword list.
///
/// The groups are fixed for the lifetime of the expander, so two FAQs with
/// identical keyword lists share one expansion. The cache is keyed by the
/// keyword contents rather than the FAQ id, which keeps it correct even when
/// a catalog repeats an id.
#[derive(Debug)]
pub struct SynonymExpander<'a> {
    groups: &'a SynonymGroups,
    cache: AHashMap<&'a [String], ExpandedKeywords<'a>>,
}

impl<'a> SynonymExpander<'a> {
    /// Create an expander over the given groups.
    pub fn new(groups: &'a SynonymGroups) -> Self {
        SynonymExpander {
            groups,
            cache: AHashMap::new(),
        }
    }

    /// Expand a keyword list, reusing an earlier expansion of the same list.
    pub fn expand(&mut self, keywords: &'a [String]) -> &ExpandedKeywords<'a> {
        let groups = self.groups;
        self.cache
            .entry(keywords)
            .or_insert_with(|| expand_keywords(keywords, groups))
    }
}
