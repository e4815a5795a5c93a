//! # Huffman Coding
//!
//! *Optimal prefix codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Frequent symbols should get short codes and rare symbols long ones. Huffman's
//! insight is that the two rarest symbols can always share the deepest level of
//! an optimal code tree, differing only in their last bit. Merge them into one
//! pseudo-symbol whose weight is their sum, and repeat until a single tree
//! remains.
//!
//! ## The Problem
//!
//! Given an alphabet with counts $f_s$, find a prefix-free binary code
//! minimizing $\sum_s f_s \cdot |c_s|$. Prefix-freedom is what lets a
//! concatenated stream decode without separators: every code ends at a leaf.
//!
//! ## Pipeline
//!
//! ```text
//! sequence ──count_frequencies──▶ FrequencyMap
//!          ──build_tree─────────▶ HuffmanTree
//!          ──generate_codes─────▶ CodeTable
//! sequence + CodeTable ──encode─▶ "0110…"
//! "0110…" + HuffmanTree ─decode─▶ sequence
//! ```
//!
//! The decoder walks the tree, not the table.
//!
//! ## Complexity Analysis
//!
//! - **Tree**: $O(n \log n)$ for $n$ distinct symbols, via a binary heap.
//! - **Encode / decode**: $O(1)$ per output bit.
//!
//! ## Edge Cases
//!
//! 1. **Empty input**: counting yields an empty map; building a tree from it
//!    fails with [`Error::EmptyAlphabet`].
//! 2. **One distinct symbol**: the tree is a single leaf. Its symbol gets the
//!    code `"0"` and every `0` bit decodes to it.
//!
//! ## Example
//!
//! ```
//! use huffman::Huffman;
//!
//! let text = "Eighty six";
//! let huffman = Huffman::from_symbols(text.chars())?;
//! let bits = huffman.encode(text.chars())?;
//! let decoded: String = huffman.decode(&bits)?.into_iter().collect();
//! assert_eq!(decoded, text);
//! # Ok::<(), huffman::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod decode;
pub mod encode;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod tree;

pub use code::{generate_codes, CodeTable, SINGLE_SYMBOL_CODE};
pub use decode::decode;
pub use encode::encode;
pub use error::{Error, Malformed, Result};
pub use frequency::{count_frequencies, FrequencyMap};
pub use huffman::Huffman;
pub use tree::{build_tree, HuffmanTree, Node};
