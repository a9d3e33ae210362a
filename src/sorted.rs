//! Binary-search maintenance of sorted, duplicate-free vectors.
//!
//! Callers own the vector: shared position sequences are copied out of their
//! `Arc` before being edited, so these helpers never observe aliased storage.

use crate::SpireErr;

/// Remove `value` from the sorted vec, returning whether it was present.
pub(crate) fn remove<T: Ord>(values: &mut Vec<T>, value: &T) -> bool {
    match values.binary_search(value) {
        Ok(index) => {
            values.remove(index);
            true
        }
        Err(_) => false,
    }
}

/// Insert `value` into the sorted vec, keeping it sorted.
///
/// A duplicate means the caller's invariant is broken; it is reported as
/// [`SpireErr::DuplicateInsert`] and must not reach users.
pub(crate) fn insert_unique<T: Ord>(values: &mut Vec<T>, value: T) -> Result<(), SpireErr> {
    match values.binary_search(&value) {
        Ok(_) => Err(SpireErr::DuplicateInsert),
        Err(index) => {
            values.insert(index, value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove() {
        let mut values = vec![1u64, 3, 5, 7];

        assert!(remove(&mut values, &5));
        assert_eq!(values, [1, 3, 7]);

        assert!(!remove(&mut values, &5));
        assert_eq!(values, [1, 3, 7]);

        assert!(remove(&mut values, &1));
        assert!(remove(&mut values, &7));
        assert!(remove(&mut values, &3));
        assert!(values.is_empty());

        assert!(!remove(&mut values, &3));
    }

    #[test]
    fn test_insert_unique() {
        let mut values: Vec<u64> = vec![];

        insert_unique(&mut values, 4).unwrap();
        insert_unique(&mut values, 1).unwrap();
        insert_unique(&mut values, 9).unwrap();
        assert_eq!(values, [1, 4, 9]);

        assert_eq!(
            insert_unique(&mut values, 4),
            Err(SpireErr::DuplicateInsert)
        );
        assert_eq!(values, [1, 4, 9]);
    }

    #[test]
    fn test_singleton() {
        let mut values: Vec<u64> = vec![];
        insert_unique(&mut values, 42).unwrap();
        assert_eq!(values, [42]);
        assert!(remove(&mut values, &42));
        assert!(values.is_empty());
    }
}
