//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for building, encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The tree builder was given a frequency map with no symbols.
    #[error("cannot build a Huffman tree from an empty alphabet")]
    EmptyAlphabet,

    /// A symbol to encode has no entry in the code table.
    ///
    /// Holds the `Debug` rendering of the symbol.
    #[error("symbol {0} is not in the code table")]
    UnknownSymbol(String),

    /// The encoded bit string does not decode against the tree.
    #[error("malformed input: {0}")]
    MalformedInput(Malformed),
}

/// Why an encoded bit string was rejected by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    /// A character other than `'0'` or `'1'`.
    #[error("invalid bit {bit:?} at position {position}")]
    InvalidBit {
        /// The offending character.
        bit: char,
        /// Character offset into the encoded string.
        position: usize,
    },

    /// The bit leads off the tree; only a single-leaf tree has such paths.
    #[error("no code continues with the bit at position {position}")]
    UnassignedPath {
        /// Character offset into the encoded string.
        position: usize,
    },

    /// The input ended in the middle of a code.
    #[error("input ends with {trailing} bits of an incomplete code")]
    TruncatedCode {
        /// Number of bits consumed since the last complete code.
        trailing: usize,
    },
}

impl From<Malformed> for Error {
    fn from(m: Malformed) -> Self {
        Error::MalformedInput(m)
    }
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
