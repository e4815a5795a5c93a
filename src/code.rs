//! Code table generation.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use log::debug;

use crate::frequency::FrequencyMap;
use crate::tree::{HuffmanTree, Node};

/// Code given to the only symbol of a single-leaf tree.
///
/// A lone leaf sits at the root and its path is empty; an empty code could
/// not be told apart in a concatenated stream.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Mapping from symbol to its code, a string of `'0'` and `'1'`.
///
/// Codes are root-to-leaf paths of one tree, so the table is prefix-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, String>,
}

/// Derive the code of every leaf in `tree`.
///
/// Descending left appends `'0'`, descending right appends `'1'`.
pub fn generate_codes<S>(tree: &HuffmanTree<S>) -> CodeTable<S>
where
    S: Ord + Clone,
{
    let mut codes = BTreeMap::new();
    match tree.root() {
        Node::Leaf { symbol, .. } => {
            codes.insert(symbol.clone(), SINGLE_SYMBOL_CODE.to_owned());
        }
        root => build_codes(root, String::new(), &mut codes),
    }
    debug!("generated {} codes", codes.len());
    CodeTable { codes }
}

fn build_codes<S: Ord + Clone>(node: &Node<S>, prefix: String, codes: &mut BTreeMap<S, String>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(symbol.clone(), prefix);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            build_codes(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push('1');
            build_codes(right, right_prefix, codes);
        }
    }
}

impl<S: Ord> CodeTable<S> {
    /// Code of `symbol`, if it has one.
    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            inner: self.codes.iter(),
        }
    }

    /// Whether no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a))
        })
    }

    /// Total number of bits needed to encode a sequence with these counts.
    ///
    /// Symbols without a code contribute nothing.
    pub fn encoded_len(&self, freqs: &FrequencyMap<S>) -> u64 {
        freqs
            .iter()
            .filter_map(|(symbol, n)| self.get(symbol).map(|code| n * code.len() as u64))
            .sum()
    }
}

/// Iterator over the entries of a [`CodeTable`].
pub struct Iter<'a, S> {
    inner: btree_map::Iter<'a, S, String>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = (&'a S, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(s, code)| (s, code.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S> ExactSizeIterator for Iter<'_, S> {}

impl<'a, S: Ord> IntoIterator for &'a CodeTable<S> {
    type Item = (&'a S, &'a str);
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: fmt::Debug> fmt::Display for CodeTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (symbol, code)) in self.codes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {}", symbol, code)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_frequencies;
    use crate::tree::build_tree;

    fn codes_for(text: &str) -> CodeTable<char> {
        let tree = build_tree(&count_frequencies(text.chars())).unwrap();
        generate_codes(&tree)
    }

    #[test]
    fn test_single_symbol_gets_fixed_code() {
        let table = codes_for("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&'a'), Some(SINGLE_SYMBOL_CODE));
    }

    #[test]
    fn test_abracadabra() {
        let table = codes_for("abracadabra");
        assert_eq!(table.get(&'a'), Some("0"));
        assert_eq!(table.get(&'c'), Some("100"));
        assert_eq!(table.get(&'d'), Some("101"));
        assert_eq!(table.get(&'b'), Some("110"));
        assert_eq!(table.get(&'r'), Some("111"));
        assert!(table.is_prefix_free());
        assert_eq!(table.encoded_len(&count_frequencies("abracadabra".chars())), 23);
    }

    #[test]
    fn test_no_empty_codes() {
        for text in ["ab", "abc", "aab", "the quick brown fox"] {
            let table = codes_for(text);
            assert!(table.iter().all(|(_, code)| !code.is_empty()), "{}", text);
        }
    }

    #[test]
    fn test_prefix_check_detects_prefix() {
        let mut codes = BTreeMap::new();
        codes.insert('a', "0".to_owned());
        codes.insert('b', "01".to_owned());
        assert!(!CodeTable { codes }.is_prefix_free());
    }

    #[test]
    fn test_display() {
        assert_eq!(codes_for("abb").to_string(), "{'a': 0, 'b': 1}");
    }
}
