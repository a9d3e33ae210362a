//! Conversions between `Spire`, `num::BigInt`, and decimal strings.
//!
//! This is the testing and debugging surface: a tower-sized value has no
//! feasible decimal form, so everything here is fallible and bounded by what
//! a conventional big integer can hold.

use std::str::FromStr;

use num::BigInt;
use num::bigint::Sign;
use num::traits::{ToPrimitive, Zero};

use crate::SpireErr;

use super::{Repr, Spire};

impl From<u64> for Spire {
    #[inline]
    fn from(word: u64) -> Self {
        Spire(Repr::Small(word))
    }
}

macro_rules! impl_from_word {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Spire {
                #[inline]
                fn from(word: $ty) -> Self {
                    Spire::from(u64::from(word))
                }
            }
        )*
    };
}
impl_from_word!(u8, u16, u32);

impl TryFrom<&Spire> for BigInt {
    type Error = SpireErr;

    /// Fails with [`SpireErr::TooLargeForBigInt`] unless every position fits
    /// a signed 32-bit integer.
    fn try_from(value: &Spire) -> Result<Self, SpireErr> {
        match &value.0 {
            Repr::Small(word) => Ok(BigInt::from(*word)),
            Repr::Large(positions) => {
                let mut out = BigInt::zero();
                for position in positions.iter() {
                    let bit = position
                        .as_u64()
                        .filter(|&bit| bit <= i32::MAX as u64)
                        .ok_or(SpireErr::TooLargeForBigInt)?;
                    out.set_bit(bit, true);
                }
                Ok(out)
            }
        }
    }
}

impl TryFrom<&BigInt> for Spire {
    type Error = SpireErr;

    fn try_from(value: &BigInt) -> Result<Self, SpireErr> {
        if value.sign() == Sign::Minus {
            return Err(SpireErr::NegativeValue);
        }
        let magnitude = value.magnitude();
        if let Some(word) = magnitude.to_u64() {
            return Ok(Spire::from(word));
        }
        let positions = (0..magnitude.bits())
            .filter(|&bit| magnitude.bit(bit))
            .map(Spire::from)
            .collect();
        Ok(Spire::from_positions(positions))
    }
}

impl Spire {
    /// Plain decimal rendering, only feasible for big-integer-sized values.
    pub fn to_decimal(&self) -> Result<String, SpireErr> {
        Ok(BigInt::try_from(self)?.to_str_radix(10))
    }
}

impl FromStr for Spire {
    type Err = SpireErr;

    fn from_str(s: &str) -> Result<Self, SpireErr> {
        let parsed = BigInt::from_str(s.trim()).map_err(|_| SpireErr::Parse)?;
        Spire::try_from(&parsed)
    }
}
