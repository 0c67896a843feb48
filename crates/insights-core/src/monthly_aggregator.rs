//! Collapses transaction slices into calendar-month series.

use std::collections::BTreeMap;

use insights_domain::{Amounted, MonthlySeries, Transaction};

/// Grouping applied by [`MonthlyAggregator::aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Total,
    Category,
}

/// Stateless month-bucketing helpers.
pub struct MonthlyAggregator;

impl MonthlyAggregator {
    /// Sums every transaction into its calendar month.
    pub fn totals<'a, I>(transactions: I) -> MonthlySeries
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions
            .into_iter()
            .map(|txn| (txn.month(), txn.amount()))
            .collect()
    }

    /// One series per category. Uncategorized rows are skipped.
    pub fn by_category<'a, I>(transactions: I) -> BTreeMap<String, MonthlySeries>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut grouped: BTreeMap<String, MonthlySeries> = BTreeMap::new();
        for txn in transactions {
            let Some(category) = txn.category_name() else {
                continue;
            };
            grouped
                .entry(category.to_string())
                .or_default()
                .add(txn.month(), txn.amount());
        }
        grouped
    }

    /// Keyed form of [`Self::totals`] (`None` key) and [`Self::by_category`] (`Some` keys).
    pub fn aggregate<'a, I>(
        transactions: I,
        group_by: GroupBy,
    ) -> BTreeMap<Option<String>, MonthlySeries>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        match group_by {
            GroupBy::Total => BTreeMap::from([(None, Self::totals(transactions))]),
            GroupBy::Category => Self::by_category(transactions)
                .into_iter()
                .map(|(category, series)| (Some(category), series))
                .collect(),
        }
    }
}
