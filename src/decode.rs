//! Tree-walking decoder.

use log::debug;

use crate::code::SINGLE_SYMBOL_CODE;
use crate::error::{Malformed, Result};
use crate::tree::{HuffmanTree, Node};

/// Decode `bits` by walking `tree` from the root.
///
/// A `'0'` moves to the left child and a `'1'` to the right child; each leaf
/// reached emits its symbol and restarts at the root.
///
/// # Errors
/// Returns `Error::MalformedInput` if `bits` contains anything but `'0'` and
/// `'1'`, follows a path the tree does not have, or ends part-way through a
/// code. No symbols are returned in that case.
pub fn decode<S: Clone>(bits: &str, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    let result = match tree.root() {
        Node::Leaf { symbol, .. } => decode_single(bits, symbol),
        root => decode_walk(bits, root),
    };
    if let Err(ref e) = result {
        debug!("rejected encoded input of {} bits: {}", bits.len(), e);
    }
    result.map_err(Into::into)
}

/// A lone leaf has no children to walk; every fixed code emits its symbol.
fn decode_single<S: Clone>(bits: &str, symbol: &S) -> std::result::Result<Vec<S>, Malformed> {
    let code = SINGLE_SYMBOL_CODE.chars().next().unwrap_or('0');
    let mut out = Vec::with_capacity(bits.len());
    for (position, bit) in bits.chars().enumerate() {
        match bit {
            b if b == code => out.push(symbol.clone()),
            '0' | '1' => return Err(Malformed::UnassignedPath { position }),
            bit => return Err(Malformed::InvalidBit { bit, position }),
        }
    }
    Ok(out)
}

fn decode_walk<S: Clone>(bits: &str, root: &Node<S>) -> std::result::Result<Vec<S>, Malformed> {
    let mut out = Vec::new();
    let mut curr = root;
    let mut trailing = 0;

    for (position, bit) in bits.chars().enumerate() {
        let (left, right) = curr
            .children()
            .ok_or(Malformed::UnassignedPath { position })?;
        curr = match bit {
            '0' => left,
            '1' => right,
            bit => return Err(Malformed::InvalidBit { bit, position }),
        };
        trailing += 1;

        if let Node::Leaf { symbol, .. } = curr {
            out.push(symbol.clone());
            curr = root;
            trailing = 0;
        }
    }

    if trailing != 0 {
        return Err(Malformed::TruncatedCode { trailing });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::frequency::count_frequencies;
    use crate::tree::build_tree;

    fn tree_for(text: &str) -> HuffmanTree<char> {
        build_tree(&count_frequencies(text.chars())).unwrap()
    }

    fn decode_str(bits: &str, tree: &HuffmanTree<char>) -> Result<String> {
        decode(bits, tree).map(|v| v.into_iter().collect())
    }

    #[test]
    fn test_decode() {
        let tree = tree_for("abracadabra");
        assert_eq!(decode_str("01101110", &tree).unwrap(), "abra");
        assert_eq!(decode_str("", &tree).unwrap(), "");
    }

    #[test]
    fn test_invalid_bit() {
        let tree = tree_for("abracadabra");
        assert_eq!(
            decode_str("0110x", &tree),
            Err(Error::MalformedInput(Malformed::InvalidBit {
                bit: 'x',
                position: 4
            }))
        );
    }

    #[test]
    fn test_truncated() {
        let tree = tree_for("abracadabra");
        assert_eq!(
            decode_str("011011", &tree),
            Err(Error::MalformedInput(Malformed::TruncatedCode { trailing: 2 }))
        );
    }

    #[test]
    fn test_single_leaf() {
        let tree = tree_for("aaaa");
        assert_eq!(decode_str("000", &tree).unwrap(), "aaa");
        assert_eq!(
            decode_str("001", &tree),
            Err(Error::MalformedInput(Malformed::UnassignedPath {
                position: 2
            }))
        );
        assert_eq!(
            decode_str("0 0", &tree),
            Err(Error::MalformedInput(Malformed::InvalidBit {
                bit: ' ',
                position: 1
            }))
        );
    }
}
