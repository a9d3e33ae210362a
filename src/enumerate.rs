use std::collections::HashSet;

use itertools::Itertools;

use crate::{Spire, SpireErr};

/// Memoized enumeration of the distinct values of `2^2^…^2` by expression
/// size.
///
/// Every size-`n` expression splits uniquely into a base of size `i` and an
/// exponent of size `n - i`, so the value set for `n` is the image of
/// [`Spire::power`] over all such pairs, deduplicated by value. Size 1 is the
/// lone literal `2`, and inductively every enumerated value is an exact power
/// of two, which is what keeps `power` applicable.
///
/// One instance per computation; the cache only grows.
pub struct Enumerator {
    sizes: Vec<HashSet<Spire>>,
}

impl Enumerator {
    pub fn new() -> Self {
        Self {
            sizes: vec![HashSet::from([Spire::from(2u64)])],
        }
    }

    /// The set of distinct values over all bracketings with `n` twos.
    ///
    /// Builds and caches every missing size up to `n`; fails with
    /// [`SpireErr::InvalidIndex`] for `n == 0`.
    pub fn values_of_size(&mut self, n: usize) -> Result<&HashSet<Spire>, SpireErr> {
        if n == 0 {
            return Err(SpireErr::InvalidIndex);
        }

        while self.sizes.len() < n {
            let size = self.sizes.len() + 1;
            let mut values = HashSet::new();
            for split in 1..size {
                let bases = &self.sizes[split - 1];
                let exponents = &self.sizes[size - split - 1];
                for (base, exponent) in bases.iter().cartesian_product(exponents) {
                    let value = base
                        .power(exponent)
                        .expect("enumerated bases are powers of two");
                    values.insert(value);
                }
            }
            self.sizes.push(values);
        }

        Ok(&self.sizes[n - 1])
    }

    /// `a(n)`: the number of distinct values with `n` twos.
    pub fn term(&mut self, n: usize) -> Result<usize, SpireErr> {
        Ok(self.values_of_size(n)?.len())
    }

    /// Unbounded iterator over `a(1), a(2), …`.
    ///
    /// Restartable: a fresh call replays already-computed sizes from the
    /// cache.
    pub fn terms(&mut self) -> Terms<'_> {
        Terms { enumerator: self, next: 1 }
    }
}

impl Default for Enumerator {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Terms<'a> {
    enumerator: &'a mut Enumerator,
    next: usize,
}

impl Iterator for Terms<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.next;
        self.next += 1;
        Some(self.enumerator.term(n).expect("term indices start at 1"))
    }
}
