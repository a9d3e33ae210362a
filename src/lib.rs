//! Spire enumerates [A002845](https://oeis.org/A002845): the number of
//! distinct values taken by `2^2^…^2` with `n` twos over all bracketings.
//! The values grow as power towers and cannot be materialized bit by bit, so
//! they are represented sparsely.
//!
//! ## Key Features:
//!
//! - **Sparse tower integers**: a [`Spire`] is either a plain 64-bit word or
//!   the strictly sorted sequence of its 1-bit positions, each position again
//!   a `Spire`. Addition, multiplication, `exp2`/`log2` and power-of-two
//!   exponentiation are defined directly on this recursive form, together
//!   with a numeric total order and hashing.
//!
//! - **Memoized enumeration**: an [`Enumerator`] lazily builds the set of
//!   distinct values per expression size by exponentiating every
//!   base/exponent split, deduplicating through `Spire` equality, and caching
//!   each size for the next one.

use thiserror::Error;

mod enumerate;
mod sorted;
mod spire;

#[cfg(test)]
mod testutil;

pub use enumerate::{Enumerator, Terms};
pub use spire::Spire;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpireErr {
    #[error("term index must be positive")]
    InvalidIndex,

    #[error("value is not an exact power of two")]
    NotPowerOfTwo,

    #[error("duplicate insert into a sorted sequence")]
    DuplicateInsert,

    #[error("value does not fit a big integer")]
    TooLargeForBigInt,

    #[error("big integer is negative")]
    NegativeValue,

    #[error("invalid decimal literal")]
    Parse,
}
