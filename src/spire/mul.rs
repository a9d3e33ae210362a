use std::ops::{Mul, MulAssign};

use super::Spire;

impl Mul<&Spire> for &Spire {
    type Output = Spire;

    fn mul(self, rhs: &Spire) -> Spire {
        if self.is_zero() || rhs.is_zero() {
            return Spire::ZERO;
        }
        if *self == 1u64 {
            return rhs.clone();
        }
        if *rhs == 1u64 {
            return self.clone();
        }

        if let (Some(a), Some(b)) = (self.as_u64(), rhs.as_u64()) {
            if let Some(product) = a.checked_mul(b) {
                return Spire::from(product);
            }
        }

        // distribute over the lighter side: x * y = Σ x * 2^q over y's bits
        let (x, y) = if self.weight() <= rhs.weight() {
            (rhs, self)
        } else {
            (self, rhs)
        };
        y.positions().map(|q| x.mul_by_exp2(&q)).sum()
    }
}

impl Mul for Spire {
    type Output = Spire;

    #[inline]
    fn mul(self, rhs: Spire) -> Spire {
        &self * &rhs
    }
}

impl Mul<&Spire> for Spire {
    type Output = Spire;

    #[inline]
    fn mul(self, rhs: &Spire) -> Spire {
        &self * rhs
    }
}

impl Mul<Spire> for &Spire {
    type Output = Spire;

    #[inline]
    fn mul(self, rhs: Spire) -> Spire {
        self * &rhs
    }
}

impl MulAssign<&Spire> for Spire {
    fn mul_assign(&mut self, rhs: &Spire) {
        *self = &*self * rhs;
    }
}

impl MulAssign for Spire {
    fn mul_assign(&mut self, rhs: Spire) {
        *self = &*self * &rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{bits_to_bigint, from_bits};
    use num::BigInt;
    use proptest::collection::btree_set;
    use proptest::proptest;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_identities() {
        let large = from_bits(&[64, 100]);
        assert_eq!(&large * &Spire::ONE, large);
        assert_eq!(&Spire::ONE * &large, large);
        assert_eq!(&large * &Spire::ZERO, Spire::ZERO);
        assert_eq!(&Spire::ZERO * &large, Spire::ZERO);
    }

    #[test]
    fn test_word_overflow_escalates() {
        // 2^64 * 2^64 = 2^128
        let exp2_64 = Spire::from(64u64).exp2();
        assert_eq!(&exp2_64 * &exp2_64, Spire::from(128u64).exp2());

        let product = &Spire::from(u64::MAX) * &Spire::from(2u64);
        assert!(!product.is_small());
        assert_eq!(product, from_bits(&(1u64..=64).collect::<Vec<_>>()));
    }

    #[test]
    fn test_max_squared_orders_above_small() {
        // u64::MAX^2 through the big-integer round trip
        let max = BigInt::from(u64::MAX);
        let expected = Spire::try_from(&(&max * &max)).unwrap();

        let squared = &Spire::from(u64::MAX) * &Spire::from(u64::MAX);
        assert_eq!(squared, expected);
        assert!(squared > Spire::from(3u64));
        assert!(Spire::from(3u64) < squared);
    }

    #[quickcheck]
    fn test_matches_u128_multiplication(a: u64, b: u64) -> bool {
        let product = &Spire::from(a) * &Spire::from(b);
        let expected = u128::from(a) * u128::from(b);
        BigInt::try_from(&product) == Ok(BigInt::from(expected))
    }

    proptest! {
        #[test]
        fn test_matches_bigint_multiplication(
            a in btree_set(0u64..128, 0..12),
            b in btree_set(0u64..128, 0..12),
        ) {
            let a: Vec<u64> = a.into_iter().collect();
            let b: Vec<u64> = b.into_iter().collect();
            let product = &from_bits(&a) * &from_bits(&b);
            let expected = bits_to_bigint(&a) * bits_to_bigint(&b);
            assert_eq!(BigInt::try_from(&product), Ok(expected));
        }

        #[test]
        fn test_commutative(
            a in btree_set(0u64..256, 0..10),
            b in btree_set(0u64..256, 0..10),
        ) {
            let a = from_bits(&a.into_iter().collect::<Vec<_>>());
            let b = from_bits(&b.into_iter().collect::<Vec<_>>());
            assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn test_associative(
            a in btree_set(0u64..128, 0..6),
            b in btree_set(0u64..128, 0..6),
            c in btree_set(0u64..128, 0..6),
        ) {
            let a = from_bits(&a.into_iter().collect::<Vec<_>>());
            let b = from_bits(&b.into_iter().collect::<Vec<_>>());
            let c = from_bits(&c.into_iter().collect::<Vec<_>>());
            assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn test_distributes_over_addition(
            a in btree_set(0u64..128, 0..8),
            b in btree_set(0u64..128, 0..8),
            c in btree_set(0u64..128, 0..8),
        ) {
            let a = from_bits(&a.into_iter().collect::<Vec<_>>());
            let b = from_bits(&b.into_iter().collect::<Vec<_>>());
            let c = from_bits(&c.into_iter().collect::<Vec<_>>());
            assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }
    }
}
