//! One-shot Huffman pipeline.
//!
//! Counts an input, builds its tree and code table once, and keeps all three
//! around for encoding and decoding.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! It was the first practical algorithm for constructing optimal prefix codes.

use std::borrow::Borrow;
use std::fmt;

use crate::code::{generate_codes, CodeTable};
use crate::decode::decode;
use crate::encode::encode;
use crate::error::Result;
use crate::frequency::{count_frequencies, FrequencyMap};
use crate::tree::{build_tree, HuffmanTree};

/// Frequencies, tree and code table derived from one input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Huffman<S> {
    freqs: FrequencyMap<S>,
    tree: HuffmanTree<S>,
    codes: CodeTable<S>,
}

impl<S> Huffman<S>
where
    S: Ord + Clone + fmt::Debug,
{
    /// Count `sequence` and derive its tree and codes.
    ///
    /// # Errors
    /// Returns `Error::EmptyAlphabet` if `sequence` is empty.
    pub fn from_symbols<I: IntoIterator<Item = S>>(sequence: I) -> Result<Self> {
        Self::from_frequencies(count_frequencies(sequence))
    }

    /// Derive tree and codes from already counted frequencies.
    ///
    /// # Errors
    /// Returns `Error::EmptyAlphabet` if `freqs` is empty.
    pub fn from_frequencies(freqs: FrequencyMap<S>) -> Result<Self> {
        let tree = build_tree(&freqs)?;
        let codes = generate_codes(&tree);
        Ok(Self { freqs, tree, codes })
    }

    /// Encode a sequence with this code table.
    pub fn encode<I>(&self, sequence: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        encode(sequence, &self.codes)
    }

    /// Decode a bit string against this tree.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        decode(bits, &self.tree)
    }

    /// Frequencies the tree was built from.
    pub fn frequencies(&self) -> &FrequencyMap<S> {
        &self.freqs
    }

    /// The Huffman tree.
    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    /// The code table.
    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    /// Number of bits the counted input encodes to.
    pub fn encoded_len(&self) -> u64 {
        self.codes.encoded_len(&self.freqs)
    }

    /// Mean code length in bits per input symbol.
    pub fn average_code_length(&self) -> f64 {
        self.encoded_len() as f64 / self.freqs.total() as f64
    }
}
