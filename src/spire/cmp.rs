use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{Repr, Spire};

// Equality is structural, which coincides with numeric equality because the
// representation is canonical.
impl PartialEq for Spire {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Repr::Small(a), Repr::Small(b)) => a == b,
            (Repr::Large(a), Repr::Large(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl Eq for Spire {}

impl Ord for Spire {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Repr::Small(a), Repr::Small(b)) => a.cmp(b),
            // canonical large values exceed u64::MAX
            (Repr::Small(_), Repr::Large(_)) => Ordering::Less,
            (Repr::Large(_), Repr::Small(_)) => Ordering::Greater,
            (Repr::Large(a), Repr::Large(b)) => {
                if Arc::ptr_eq(a, b) {
                    return Ordering::Equal;
                }
                // compare aligned from the highest position down; the first
                // difference decides
                for (x, y) in a.iter().rev().zip(b.iter().rev()) {
                    match x.cmp(y) {
                        Ordering::Equal => continue,
                        decided => return decided,
                    }
                }
                // one sequence is a top-aligned suffix of the other; the
                // longer one carries extra lower bits
                a.len().cmp(&b.len())
            }
        }
    }
}

impl PartialOrd for Spire {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Order-sensitive over the canonical positions; no commutative mixing needed.
impl Hash for Spire {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Repr::Small(word) => {
                state.write_u8(0);
                word.hash(state);
            }
            Repr::Large(positions) => {
                state.write_u8(1);
                state.write_usize(positions.len());
                for position in positions.iter() {
                    position.hash(state);
                }
            }
        }
    }
}

// Spire == u64
impl PartialEq<u64> for Spire {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        self.as_u64() == Some(*other)
    }
}

// u64 == Spire
impl PartialEq<Spire> for u64 {
    #[inline]
    fn eq(&self, other: &Spire) -> bool {
        other == self
    }
}

// Spire < u64
impl PartialOrd<u64> for Spire {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        match &self.0 {
            Repr::Small(word) => Some(word.cmp(other)),
            Repr::Large(_) => Some(Ordering::Greater),
        }
    }
}

// u64 < Spire
impl PartialOrd<Spire> for u64 {
    fn partial_cmp(&self, other: &Spire) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}
