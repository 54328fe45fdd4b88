//! Per-country aggregation of Forbes Global 2000 records
//!
//! Filters the loaded table down to a fixed reference set of EU member
//! states and folds the retained rows into three sorted aggregates:
//! company count, summed market value, and best (lowest) rank.
//!
//! ## Architecture
//!
//! - [`reference_set`] - Exact-match membership test for EU countries
//! - [`aggregate`] - Insertion-ordered country-to-value mappings
//! - [`aggregator`] - Single-pass fold over the table

pub mod aggregate;
pub mod aggregator;
pub mod reference_set;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use aggregate::CountryAggregate;
pub use aggregator::{aggregate, EuAggregates};
pub use reference_set::EuReferenceSet;
