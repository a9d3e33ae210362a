use std::fmt::{self, Debug};
use std::sync::Arc;

use either::Either;
use itertools::Itertools;

use crate::SpireErr;

mod add;
mod cmp;
mod convert;
mod mul;

/// An immutable non-negative integer of potentially tower-like magnitude.
///
/// Values that fit an unsigned 64-bit word are stored verbatim; anything
/// larger is the strictly sorted sequence of its 1-bit positions, each
/// position itself a `Spire`. The positions sequence is shared by reference
/// across derived values and never mutated in place.
#[derive(Clone)]
pub struct Spire(Repr);

#[derive(Clone)]
enum Repr {
    Small(u64),
    Large(Arc<[Spire]>),
}

static_assertions::const_assert_eq!(std::mem::size_of::<Spire>(), 16);

impl Spire {
    pub const ZERO: Spire = Spire(Repr::Small(0));
    pub const ONE: Spire = Spire(Repr::Small(1));

    /// Canonicalizing constructor: every `Spire` built from positions goes
    /// through here.
    ///
    /// Requires `positions` to be strictly ascending. An empty sequence is
    /// zero, and any value whose maximum position is below 64 is downcast to
    /// the word form. The downcast is what makes "small < any large" a sound
    /// ordering rule.
    pub(crate) fn from_positions(positions: Vec<Spire>) -> Spire {
        debug_assert!(
            positions.iter().tuple_windows().all(|(a, b)| a < b),
            "positions must be strictly ascending"
        );

        match positions.last() {
            None => Spire::ZERO,
            Some(max) if *max < 64u64 => {
                let mut word = 0u64;
                for position in &positions {
                    // max < 64 bounds every position below it
                    let bit = position.as_u64().expect("positions below 64 are words");
                    word |= 1 << bit;
                }
                Spire(Repr::Small(word))
            }
            _ => Spire(Repr::Large(positions.into())),
        }
    }

    /// True iff the value is stored as a 64-bit word.
    #[inline]
    pub fn is_small(&self) -> bool {
        matches!(self.0, Repr::Small(_))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self.0, Repr::Small(0))
    }

    /// The stored word, when the value fits one.
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match self.0 {
            Repr::Small(word) => Some(word),
            Repr::Large(_) => None,
        }
    }

    /// Hamming weight: the number of 1-bits in the binary expansion.
    #[inline]
    pub fn weight(&self) -> usize {
        match &self.0 {
            Repr::Small(word) => word.count_ones() as usize,
            Repr::Large(positions) => positions.len(),
        }
    }

    /// The 1-bit positions in ascending order.
    ///
    /// Word values scan their bits on demand; large values clone out of the
    /// shared positions sequence.
    pub fn positions(&self) -> impl Iterator<Item = Spire> + '_ {
        match &self.0 {
            Repr::Small(word) => Either::Left(WordPositionsIter { word: *word }),
            Repr::Large(positions) => Either::Right(positions.iter().cloned()),
        }
    }

    /// Owned copy of the positions, sized to the Hamming weight up front.
    pub(crate) fn positions_vec(&self) -> Vec<Spire> {
        match &self.0 {
            Repr::Small(_) => self.positions().collect(),
            Repr::Large(positions) => positions.to_vec(),
        }
    }

    /// The successor `self + 1`.
    pub fn plus_one(&self) -> Spire {
        match &self.0 {
            Repr::Small(word) => match word.checked_add(1) {
                Some(next) => Spire(Repr::Small(next)),
                // 2^64 - 1 rolls over to the single position 64
                None => Spire::from_positions(vec![Spire::from(64u64)]),
            },
            Repr::Large(_) => self + &Spire::ONE,
        }
    }

    /// `2^self`.
    pub fn exp2(&self) -> Spire {
        match self.as_u64() {
            Some(exponent) if exponent < 64 => Spire(Repr::Small(1 << exponent)),
            _ => Spire::from_positions(vec![self.clone()]),
        }
    }

    /// The base-2 logarithm, defined only on exact powers of two.
    pub fn log2(&self) -> Result<Spire, SpireErr> {
        match &self.0 {
            Repr::Small(word) if word.is_power_of_two() => {
                Ok(Spire::from(word.trailing_zeros() as u64))
            }
            Repr::Large(positions) if positions.len() == 1 => Ok(positions[0].clone()),
            _ => Err(SpireErr::NotPowerOfTwo),
        }
    }

    /// `self * 2^k`, the shift of every 1-bit position by `k`.
    pub fn mul_by_exp2(&self, k: &Spire) -> Spire {
        if self.is_zero() || k.is_zero() {
            return self.clone();
        }
        if let (Some(word), Some(shift)) = (self.as_u64(), k.as_u64()) {
            if shift < 64 && u64::from(word.leading_zeros()) >= shift {
                return Spire(Repr::Small(word << shift));
            }
        }
        // adding k is strictly monotone, so the shifted positions stay sorted
        Spire::from_positions(self.positions().map(|p| &p + k).collect())
    }

    /// `self^exp`; requires `self` to be an exact power of two.
    pub fn power(&self, exp: &Spire) -> Result<Spire, SpireErr> {
        Ok((&self.log2()? * exp).exp2())
    }
}

/// Ascending scan over the set bits of a word.
struct WordPositionsIter {
    word: u64,
}

impl Iterator for WordPositionsIter {
    type Item = Spire;

    fn next(&mut self) -> Option<Self::Item> {
        if self.word == 0 {
            return None;
        }
        let bit = self.word.trailing_zeros() as u64;
        self.word &= self.word - 1;
        Some(Spire::from(bit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.word.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WordPositionsIter {}

impl Debug for Spire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Small(word) => write!(f, "{word}"),
            Repr::Large(positions) => {
                write!(f, "(")?;
                for (i, position) in positions.iter().rev().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "2^{position:?}")?;
                }
                write!(f, ")")
            }
        }
    }
}
