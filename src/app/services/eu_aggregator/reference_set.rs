//! EU membership test for company records

use std::collections::HashSet;

use crate::constants::EU_MEMBER_STATES;

/// Immutable set of country names treated as in-scope for aggregation.
///
/// Membership is exact, case-sensitive string equality. The set is fixed
/// at construction, so tests can substitute alternate country lists.
#[derive(Debug, Clone)]
pub struct EuReferenceSet {
    countries: HashSet<String>,
}

impl EuReferenceSet {
    /// Build a reference set from an explicit country list
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact-match membership test, O(1) amortized
    pub fn contains(&self, country: &str) -> bool {
        self.countries.contains(country)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Default for EuReferenceSet {
    /// The EU member states of the source year
    fn default() -> Self {
        Self::new(EU_MEMBER_STATES.iter().copied())
    }
}
