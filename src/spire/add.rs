use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::sorted;

use super::Spire;

impl Add<&Spire> for &Spire {
    type Output = Spire;

    fn add(self, rhs: &Spire) -> Spire {
        if self.is_zero() {
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }

        if let (Some(a), Some(b)) = (self.as_u64(), rhs.as_u64()) {
            if let Some(sum) = a.checked_add(b) {
                return Spire::from(sum);
            }
        }

        // merge the lighter side's bits into a copy of the heavier side's
        let (acc, addend) = if self.weight() >= rhs.weight() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut positions = acc.positions_vec();
        for q in addend.positions() {
            let mut carry = q;
            // a hit means the bit was already set: clear it and carry one
            // position higher; carries strictly ascend, so this terminates
            while sorted::remove(&mut positions, &carry) {
                carry = carry.plus_one();
            }
            sorted::insert_unique(&mut positions, carry)
                .expect("carry landed on a cleared bit");
        }
        Spire::from_positions(positions)
    }
}

impl Add for Spire {
    type Output = Spire;

    #[inline]
    fn add(self, rhs: Spire) -> Spire {
        &self + &rhs
    }
}

impl Add<&Spire> for Spire {
    type Output = Spire;

    #[inline]
    fn add(self, rhs: &Spire) -> Spire {
        &self + rhs
    }
}

impl Add<Spire> for &Spire {
    type Output = Spire;

    #[inline]
    fn add(self, rhs: Spire) -> Spire {
        self + &rhs
    }
}

impl AddAssign<&Spire> for Spire {
    fn add_assign(&mut self, rhs: &Spire) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Spire {
    fn add_assign(&mut self, rhs: Spire) {
        *self = &*self + &rhs;
    }
}

impl Sum for Spire {
    fn sum<I: Iterator<Item = Spire>>(iter: I) -> Spire {
        iter.fold(Spire::ZERO, |acc, value| acc + value)
    }
}
