//! Symbol frequency counting.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Occurrence count of every distinct symbol in an input sequence.
///
/// Backed by an ordered map, so iteration always visits symbols in ascending
/// order. The tree builder relies on that order for its tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMap<S> {
    counts: BTreeMap<S, u64>,
}

/// Count how often each symbol occurs in `sequence`.
///
/// An empty sequence yields an empty map.
pub fn count_frequencies<S, I>(sequence: I) -> FrequencyMap<S>
where
    S: Ord,
    I: IntoIterator<Item = S>,
{
    let mut counts = BTreeMap::new();
    for symbol in sequence {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    FrequencyMap { counts }
}

impl<S: Ord> FrequencyMap<S> {
    /// Count of `symbol`, or `None` if it never occurred.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no symbol was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted sequence.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

impl<S: Ord> FromIterator<S> for FrequencyMap<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        count_frequencies(iter)
    }
}

impl<'a, S: Ord> IntoIterator for &'a FrequencyMap<S> {
    type Item = (&'a S, u64);
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`FrequencyMap`].
pub struct Iter<'a, S> {
    inner: btree_map::Iter<'a, S, u64>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = (&'a S, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(s, &n)| (s, n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S> ExactSizeIterator for Iter<'_, S> {}

impl<S: fmt::Debug> fmt::Display for FrequencyMap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (symbol, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {}", symbol, count)?;
        }
        f.write_str("}")
    }
}
