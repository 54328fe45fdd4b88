//! Single-pass fold of the company table into per-country aggregates

use tracing::debug;

use super::aggregate::CountryAggregate;
use super::reference_set::EuReferenceSet;
use crate::app::models::Table;
use crate::constants::columns;
use crate::Result;

/// The three per-country aggregates derived from one load.
///
/// The sort directions carry domain meaning: count and market value are
/// stored ascending (larger is better, so a consumer reads "best last"),
/// best rank is stored descending (smaller is better, best likewise last).
#[derive(Debug, Clone, Default)]
pub struct EuAggregates {
    /// Number of retained companies per country, ascending by value
    pub company_count: CountryAggregate<f64>,

    /// Summed market value per country, ascending by value
    pub market_value: CountryAggregate<f64>,

    /// Best (minimum) Forbes rank per country, descending by value
    pub best_rank: CountryAggregate<i32>,
}

/// Fold the table into the three aggregates in a single pass.
///
/// Rows whose country is outside the reference set are skipped; a country
/// appears in the aggregates iff at least one row was retained for it.
pub fn aggregate(table: &Table, reference: &EuReferenceSet) -> Result<EuAggregates> {
    let mut aggregates = EuAggregates::default();

    for row in table.rows() {
        let country = row.get_str(columns::COUNTRY)?;
        if !reference.contains(country) {
            continue;
        }

        aggregates.company_count.add(country, 1.0);
        aggregates
            .market_value
            .add(country, row.get_float(columns::MARKET_VALUE)?);
        aggregates
            .best_rank
            .min_assign(country, row.get_int(columns::RANK)?);
    }

    aggregates.company_count.sort_values();
    aggregates.market_value.sort_values();
    aggregates.best_rank.sort_values_reverse();

    debug!(
        "aggregated {} rows into {} countries",
        table.len(),
        aggregates.company_count.len()
    );

    Ok(aggregates)
}
