//! Sequence encoding.

use std::borrow::Borrow;
use std::fmt;

use crate::code::CodeTable;
use crate::error::{Error, Result};

/// Encode `sequence` as the concatenation of each symbol's code.
///
/// # Errors
/// Returns `Error::UnknownSymbol` if a symbol has no code in `table`. Nothing
/// is returned for the symbols before it.
pub fn encode<S, I>(sequence: I, table: &CodeTable<S>) -> Result<String>
where
    S: Ord + fmt::Debug,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    let mut bits = String::new();
    for item in sequence {
        let symbol: &S = item.borrow();
        let code = table
            .get(symbol)
            .ok_or_else(|| Error::UnknownSymbol(format!("{:?}", symbol)))?;
        bits.push_str(code);
    }
    Ok(bits)
}
