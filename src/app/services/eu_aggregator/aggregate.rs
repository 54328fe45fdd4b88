//! Insertion-ordered country-to-value mappings
//!
//! A [`CountryAggregate`] maps each country to one derived statistic. Keys
//! are unique and keep their first-seen order until a sort is applied; the
//! sorts are stable, so equal values preserve first-seen relative order.
//! Keys and values are exposed as parallel sequences for the presentation
//! layer.

use std::cmp::Ordering;
use std::collections::HashMap;

/// A mapping from country name to one numeric statistic
#[derive(Debug, Clone)]
pub struct CountryAggregate<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V: Copy> CountryAggregate<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored for `country`, if the country has been seen
    pub fn get(&self, country: &str) -> Option<V> {
        self.index.get(country).map(|&i| self.entries[i].1)
    }

    /// Country names in the mapping's current order
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(country, _)| country.as_str()).collect()
    }

    /// Values parallel to [`keys`](Self::keys)
    pub fn values(&self) -> Vec<V> {
        self.entries.iter().map(|(_, value)| *value).collect()
    }

    /// Iterate over (country, value) pairs in the current order
    pub fn iter(&self) -> impl Iterator<Item = (&str, V)> {
        self.entries
            .iter()
            .map(|(country, value)| (country.as_str(), *value))
    }

    /// Insert `seed` on first sight of `country`, otherwise replace the
    /// stored value with `update(stored)`.
    fn upsert<F>(&mut self, country: &str, seed: V, update: F)
    where
        F: FnOnce(V) -> V,
    {
        match self.index.get(country) {
            Some(&position) => {
                let current = self.entries[position].1;
                self.entries[position].1 = update(current);
            }
            None => {
                self.index.insert(country.to_string(), self.entries.len());
                self.entries.push((country.to_string(), seed));
            }
        }
    }

    /// Sort positions moved, the lookup index has to follow
    fn rebuild_index(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, (country, _))| (country.clone(), position))
            .collect();
    }
}

impl<V: Copy + std::ops::Add<Output = V>> CountryAggregate<V> {
    /// Add `amount` to a country's value, starting from `amount` on first
    /// sight
    pub fn add(&mut self, country: &str, amount: V) {
        self.upsert(country, amount, |current| current + amount);
    }
}

impl<V: Copy + PartialOrd> CountryAggregate<V> {
    /// Keep the minimum of the stored value and `candidate`; first sight
    /// stores `candidate` directly, so no "unseen" sentinel is needed
    pub fn min_assign(&mut self, country: &str, candidate: V) {
        self.upsert(country, candidate, |current| {
            if candidate < current {
                candidate
            } else {
                current
            }
        });
    }

    /// Sort entries ascending by value; ties keep first-seen order
    pub fn sort_values(&mut self) {
        self.entries
            .sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        self.rebuild_index();
    }

    /// Sort entries descending by value; ties keep first-seen order
    pub fn sort_values_reverse(&mut self) {
        self.entries
            .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        self.rebuild_index();
    }
}

impl<V: Copy> Default for CountryAggregate<V> {
    fn default() -> Self {
        Self::new()
    }
}
