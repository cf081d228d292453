//! Synonym handling for keyword expansion.
//!
//! - [`groups::SynonymGroups`] - Root term → synonym list mapping from the rules configuration
//! - [`expander::SynonymExpander`] - Expands an FAQ's keyword list through those groups

pub mod expander;
pub mod groups;

pub use expander::{ExpandedKeywords, SynonymExpander, expand_keywords};
pub use groups::SynonymGroups;
