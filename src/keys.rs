//! Candidate-key enumeration.
//!
//! A candidate key is a minimal attribute set whose closure is the whole
//! universe. The search walks the subset lattice by ascending size and
//! prunes every subset that contains an already-confirmed key: such a
//! superset can be a superkey but never a minimal one. Because sizes are
//! tried in increasing order, every key that survives the pruning is
//! minimal by construction and the result is an antichain.

use log::debug;

use crate::attrs::{AttrSet, Combinations};
use crate::closure::is_superkey;
use crate::cover::drop_trivial;
use crate::fd::{check_universe, Fd};

/// Returns all size-`c` subsets of a width-`n` universe that are not
/// supersets of any set in `exclude`.
///
/// Generation order is the deterministic order of [`Combinations`].
pub fn combinations_excluding(n: u32, c: u32, exclude: &[AttrSet]) -> Vec<AttrSet> {
    Combinations::new(n, c)
        .filter(|subset| !exclude.iter().any(|ex| ex.is_subset_of(subset)))
        .collect()
}

/// Computes all candidate keys of a relation with `n` attributes under
/// `fds`, sorted ascending by set value.
///
/// Trivial dependencies are ignored. If no non-trivial dependency remains
/// (in particular for an empty `fds`), the full attribute set is the only
/// candidate key.
///
/// # Panics
///
/// Panics if `n > 64` or any dependency has width other than `n`.
pub fn candidate_keys(n: u32, fds: &[Fd]) -> Vec<AttrSet> {
    check_universe(n, fds);
    let non_trivial = drop_trivial(fds);
    if non_trivial.is_empty() {
        return vec![AttrSet::full(n)];
    }

    let mut keys: Vec<AttrSet> = Vec::new();
    for c in 0..=n {
        for subset in combinations_excluding(n, c, &keys) {
            if is_superkey(subset, &non_trivial) {
                debug!("candidate key found: {}", subset);
                keys.push(subset);
            }
        }
    }

    keys.sort();
    keys
}

/// Returns the union of all candidate keys: the set of prime attributes.
///
/// # Panics
///
/// Panics if `n > 64` or any dependency has width other than `n`.
pub fn prime_attributes(n: u32, fds: &[Fd]) -> AttrSet {
    candidate_keys(n, fds)
        .into_iter()
        .fold(AttrSet::empty(n), |acc, key| acc | key)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn set(bits: u64) -> AttrSet {
        AttrSet::from_bits(5, bits)
    }

    fn fd(lhs: u64, rhs: u64) -> Fd {
        Fd::new(set(lhs), set(rhs))
    }

    fn schema() -> Vec<Fd> {
        vec![
            fd(0b00011, 0b11100),
            fd(0b00101, 0b11010),
            fd(0b00010, 0b00100),
            fd(0b00100, 0b00010),
            fd(0b00100, 0b01000),
            fd(0b00010, 0b10000),
            fd(0b00100, 0b10000),
        ]
    }

    #[test]
    fn test_worked_example() {
        // Keys of the A..E schema are AB and AC.
        assert_eq!(candidate_keys(5, &schema()), vec![set(0b00011), set(0b00101)]);
    }

    #[test]
    fn test_antichain_and_superkey() {
        let keys = candidate_keys(5, &schema());
        for key in &keys {
            assert!(is_superkey(*key, &schema()));
        }
        for a in &keys {
            for b in &keys {
                if a != b {
                    assert!(!a.is_subset_of(b));
                }
            }
        }
    }

    #[test]
    fn test_empty_fds() {
        assert_eq!(candidate_keys(4, &[]), vec![AttrSet::full(4)]);
    }

    #[test]
    fn test_all_trivial() {
        let fds = vec![Fd::new(set(0b00110), set(0b00010))];
        assert_eq!(candidate_keys(5, &fds), vec![AttrSet::full(5)]);
    }

    #[test]
    fn test_single_attribute_key() {
        // A -> B, B -> C over 3 attributes: the key is {A}.
        let fds = vec![
            Fd::new(AttrSet::from_bits(3, 0b001), AttrSet::from_bits(3, 0b010)),
            Fd::new(AttrSet::from_bits(3, 0b010), AttrSet::from_bits(3, 0b100)),
        ];
        assert_eq!(candidate_keys(3, &fds), vec![AttrSet::from_bits(3, 0b001)]);
    }

    #[test]
    fn test_prime_attributes() {
        assert_eq!(prime_attributes(5, &schema()), set(0b00111));

        let fds = vec![
            Fd::new(AttrSet::from_bits(3, 0b011), AttrSet::from_bits(3, 0b100)),
            Fd::new(AttrSet::from_bits(3, 0b010), AttrSet::from_bits(3, 0b100)),
        ];
        // Sole key AB: prime attributes are A and B.
        assert_eq!(prime_attributes(3, &fds), AttrSet::from_bits(3, 0b011));
    }

    #[test]
    fn test_combinations_excluding() {
        let exclude = vec![AttrSet::from_bits(4, 0b0011)];
        let left: Vec<_> = combinations_excluding(4, 2, &exclude)
            .into_iter()
            .map(|s| s.bits())
            .collect();
        // {0,1} is excluded, all other pairs survive.
        assert_eq!(left, vec![0b0101, 0b1001, 0b0110, 0b1010, 0b1100]);
    }

    #[test]
    fn test_combinations_excluding_supersets() {
        let exclude = vec![AttrSet::from_bits(4, 0b0001)];
        // Every 2-subset containing bit 0 is pruned.
        let left: Vec<_> = combinations_excluding(4, 2, &exclude)
            .into_iter()
            .map(|s| s.bits())
            .collect();
        assert_eq!(left, vec![0b0110, 0b1010, 0b1100]);
    }
}
