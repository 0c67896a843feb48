//! Calendar-month keys and month-indexed series shared by the engines.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Identifies a calendar month. Orders by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Builds a key, returning `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the month immediately following this one.
    pub fn next(self) -> Self {
        if self.month >= 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the `count` consecutive months after this one.
    pub fn following(self, count: usize) -> Vec<MonthKey> {
        let mut months = Vec::with_capacity(count);
        let mut cursor = self;
        for _ in 0..count {
            cursor = cursor.next();
            months.push(cursor);
        }
        months
    }

    /// Formats the key as `YYYY-MM`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// Ordered mapping from calendar month to summed amount.
///
/// Keys iterate strictly ascending; adding to an existing month accumulates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    points: BTreeMap<MonthKey, f64>,
}

impl MonthlySeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the running total of `month`.
    pub fn add(&mut self, month: MonthKey, amount: f64) {
        *self.points.entry(month).or_insert(0.0) += amount;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, month: MonthKey) -> Option<f64> {
        self.points.get(&month).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = MonthKey> + '_ {
        self.points.keys().copied()
    }

    /// Values in ascending month order.
    pub fn values(&self) -> Vec<f64> {
        self.points.values().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MonthKey, f64)> + '_ {
        self.points.iter().map(|(month, value)| (*month, *value))
    }

    pub fn first_month(&self) -> Option<MonthKey> {
        self.points.keys().next().copied()
    }

    pub fn last_month(&self) -> Option<MonthKey> {
        self.points.keys().next_back().copied()
    }

    /// Value of the most recent month.
    pub fn last(&self) -> Option<f64> {
        self.points.values().next_back().copied()
    }

    pub fn sum(&self) -> f64 {
        self.points.values().sum()
    }

    /// Arithmetic mean of the monthly values, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        if self.points.is_empty() {
            None
        } else {
            Some(self.sum() / self.points.len() as f64)
        }
    }

    /// Keeps only the `count` most recent months.
    pub fn tail(&self, count: usize) -> MonthlySeries {
        let skip = self.points.len().saturating_sub(count);
        Self {
            points: self.points.iter().skip(skip).map(|(k, v)| (*k, *v)).collect(),
        }
    }
}

impl FromIterator<(MonthKey, f64)> for MonthlySeries {
    fn from_iter<I: IntoIterator<Item = (MonthKey, f64)>>(iter: I) -> Self {
        let mut series = MonthlySeries::new();
        for (month, amount) in iter {
            series.add(month, amount);
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_rolls_over_year_end() {
        let december = MonthKey::new(2024, 12).unwrap();
        assert_eq!(december.next(), MonthKey::new(2025, 1).unwrap());
        assert_eq!(december.to_string(), "2024-12");
    }

    #[test]
    fn month_key_rejects_invalid_month() {
        assert!(MonthKey::new(2024, 0).is_none());
        assert!(MonthKey::new(2024, 13).is_none());
    }

    #[test]
    fn following_lists_consecutive_months() {
        let start = MonthKey::new(2024, 11).unwrap();
        let labels: Vec<String> = start.following(3).iter().map(MonthKey::label).collect();
        assert_eq!(labels, vec!["2024-12", "2025-01", "2025-02"]);
    }

    #[test]
    fn series_accumulates_and_orders_months() {
        let mut series = MonthlySeries::new();
        series.add(MonthKey::new(2024, 3).unwrap(), 10.0);
        series.add(MonthKey::new(2024, 1).unwrap(), 5.0);
        series.add(MonthKey::new(2024, 3).unwrap(), 2.5);

        assert_eq!(series.len(), 2);
        assert_eq!(series.values(), vec![5.0, 12.5]);
        assert_eq!(series.last_month(), MonthKey::new(2024, 3));
        assert_eq!(series.mean(), Some(8.75));
    }

    #[test]
    fn tail_keeps_most_recent_months() {
        let series: MonthlySeries = (1..=5)
            .map(|m| (MonthKey::new(2024, m).unwrap(), m as f64))
            .collect();
        assert_eq!(series.tail(3).values(), vec![3.0, 4.0, 5.0]);
        assert_eq!(series.tail(10).len(), 5);
    }
}
