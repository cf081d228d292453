//! Whitespace collapsing char filter.

use super::CharFilter;

/// Collapses every run of Unicode whitespace into a single ASCII space and
/// trims both ends.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceCollapseCharFilter;

impl WhitespaceCollapseCharFilter {
    /// Create a new whitespace collapsing filter.
    pub fn new() -> Self {
        WhitespaceCollapseCharFilter
    }
}

impl CharFilter for WhitespaceCollapseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "whitespace_collapse"
    }
}
