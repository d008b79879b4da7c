use std::{collections::BTreeSet, collections::HashSet, hash::Hash};

use crate::data::record::Record;

/// Row predicate shared by the scene pipelines.
pub trait RecordFilter {
    /// True when `record` belongs in the filtered view.
    fn accepts(&self, record: &Record) -> bool;

    /// Conjunction of two filters.
    fn and<F: RecordFilter>(self, other: F) -> Both<Self, F>
    where
        Self: Sized,
    {
        Both(self, other)
    }
}

impl<F> RecordFilter for F
where
    F: Fn(&Record) -> bool,
{
    fn accepts(&self, record: &Record) -> bool {
        self(record)
    }
}

/// Conjunction built by [`RecordFilter::and`].
#[derive(Clone, Copy, Debug)]
pub struct Both<A, B>(pub A, pub B);

impl<A: RecordFilter, B: RecordFilter> RecordFilter for Both<A, B> {
    fn accepts(&self, record: &Record) -> bool {
        self.0.accepts(record) && self.1.accepts(record)
    }
}

/// `budget > 0 && gross > 0`. `NaN` fails both comparisons.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositiveMoney;

impl RecordFilter for PositiveMoney {
    fn accepts(&self, record: &Record) -> bool {
        record.budget > 0.0 && record.gross > 0.0
    }
}

/// Exact release-year match.
#[derive(Clone, Copy, Debug)]
pub struct YearIs(pub i32);

impl RecordFilter for YearIs {
    fn accepts(&self, record: &Record) -> bool {
        record.year == Some(self.0)
    }
}

/// Exact genre match.
#[derive(Clone, Copy, Debug)]
pub struct GenreIs<'a>(pub &'a str);

impl RecordFilter for GenreIs<'_> {
    fn accepts(&self, record: &Record) -> bool {
        record.genre == self.0
    }
}

/// Company membership in a selection.
#[derive(Clone, Copy, Debug)]
pub struct CompanyIn<'a>(pub &'a BTreeSet<String>);

impl RecordFilter for CompanyIn<'_> {
    fn accepts(&self, record: &Record) -> bool {
        self.0.contains(&record.company)
    }
}

/// Inclusive score window `min <= score <= max`.
#[derive(Clone, Copy, Debug)]
pub struct ScoreWithin {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl RecordFilter for ScoreWithin {
    fn accepts(&self, record: &Record) -> bool {
        record.score >= self.min && record.score <= self.max
    }
}

/// How [`pick_max`] resolves several items sharing the maximal key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TiePolicy {
    /// Every item whose key equals the maximum.
    AllTied,
    /// Only the first item in scan order (strict greater-than scan).
    FirstFound,
}

/// Indices of the item(s) with the largest key, in input order.
///
/// Items whose key is not finite never win.
pub fn pick_max<T>(items: &[T], key: impl Fn(&T) -> f64, policy: TiePolicy) -> Vec<usize> {
    match policy {
        TiePolicy::FirstFound => {
            let mut best: Option<(usize, f64)> = None;
            for (i, item) in items.iter().enumerate() {
                let k = key(item);
                if !k.is_finite() {
                    continue;
                }
                if best.is_none_or(|(_, b)| k > b) {
                    best = Some((i, k));
                }
            }
            best.map(|(i, _)| vec![i]).unwrap_or_default()
        }
        TiePolicy::AllTied => {
            let Some(max) = max_of(items.iter().map(&key).filter(|k| k.is_finite())) else {
                return Vec::new();
            };
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| key(item) == max)
                .map(|(i, _)| i)
                .collect()
        }
    }
}

/// Largest value, ignoring `NaN`. `None` for an empty (or all-`NaN`) input.
pub fn max_of(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}

/// `(min, max)` ignoring `NaN`. `None` for an empty (or all-`NaN`) input.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Distinct values in first-occurrence order.
pub fn distinct_in_order<T>(values: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v.clone()) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/data/filter.rs"]
mod tests;
