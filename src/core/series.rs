//! Labeled one-dimensional tables.
//!
//! A [`LabeledSeries`] is an ordered `label -> value` mapping. Insertion order is
//! the canonical order used for rendering. Lookups by label are O(1) on average.
//! Combining two series never relies on implicit alignment: callers decide how
//! labels are matched (see `metrics::distance::AlignmentPolicy`).

use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// One `(label, value)` pair of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesEntry<T> {
    pub label: String,
    pub value: T,
}

/// Ordered, label-indexed series of values.
///
/// Labels are expected to be unique. When a label repeats, every entry is kept
/// in order but [`LabeledSeries::get`] resolves to the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries<T> {
    entries: Vec<SeriesEntry<T>>,
    index: HashMap<String, usize>,
}

impl<T> Default for LabeledSeries<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> LabeledSeries<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<L, I>(pairs: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, T)>,
    {
        let mut series = Self::new();
        for (label, value) in pairs {
            series.push(label, value);
        }
        series
    }

    /// Append an entry at the end of the series.
    pub fn push(&mut self, label: impl Into<String>, value: T) {
        let label = label.into();
        let position = self.entries.len();
        self.index.entry(label.clone()).or_insert(position);
        self.entries.push(SeriesEntry { label, value });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&T> {
        self.index.get(label).map(|&i| &self.entries[i].value)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|e| (e.label.as_str(), &e.value))
    }

    /// Apply `f` to every value, keeping labels and order.
    pub fn map<U, F>(&self, mut f: F) -> LabeledSeries<U>
    where
        F: FnMut(&str, &T) -> U,
    {
        LabeledSeries::from_pairs(self.iter().map(|(label, value)| (label, f(label, value))))
    }

    /// Labels of `self` that have no entry in `other`, in `self` order.
    pub fn labels_missing_from<U>(&self, other: &LabeledSeries<U>) -> Vec<String> {
        self.labels()
            .filter(|label| !other.contains(label))
            .map(str::to_string)
            .collect()
    }
}

impl LabeledSeries<f64> {
    /// Arithmetic mean of the values, `None` for an empty series.
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.values().sum::<f64>() / self.len() as f64)
    }

    /// Entry with the largest value, first one wins on ties.
    pub fn max_entry(&self) -> Option<&SeriesEntry<f64>> {
        self.entries.iter().fold(None, |best, entry| match best {
            Some(b) if b.value >= entry.value => Some(b),
            _ => Some(entry),
        })
    }
}

impl<T: Serialize> Serialize for LabeledSeries<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<L: Into<String>, T> FromIterator<(L, T)> for LabeledSeries<T> {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
