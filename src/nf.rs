//! Normal-form classification.
//!
//! Three predicates over a declared dependency set, successively weaker:
//! Boyce-Codd, third, and second normal form. Each predicate is correct on
//! its own; [`classify`] additionally computes the candidate keys once and
//! walks the ladder top-down, short-circuiting the cheaper checks whenever
//! a stronger form already holds (BCNF implies 3NF implies 2NF).
//!
//! Trivial dependencies never violate anything and are skipped everywhere.

use crate::attrs::AttrSet;
use crate::closure::closure;
use crate::fd::{check_universe, Fd};
use crate::keys::candidate_keys;

/// Returns true if every non-trivial dependency has a superkey determinant.
///
/// # Panics
///
/// Panics if `n > 64` or any dependency has width other than `n`.
pub fn is_bcnf(n: u32, fds: &[Fd]) -> bool {
    check_universe(n, fds);
    fds.iter()
        .filter(|fd| !fd.is_trivial())
        .all(|fd| closure(fd.lhs(), fds).is_full())
}

/// Returns true if the relation is in third normal form: every non-trivial
/// dependency either has a superkey determinant or only contributes prime
/// attributes.
///
/// # Panics
///
/// Panics if `n > 64` or any dependency has width other than `n`.
pub fn is_3nf(n: u32, fds: &[Fd]) -> bool {
    check_universe(n, fds);
    let keys = candidate_keys(n, fds);
    check_3nf(n, fds, &keys)
}

/// Returns true if the relation is in second normal form: no non-prime
/// attribute depends on a proper subset of a candidate key.
///
/// # Panics
///
/// Panics if `n > 64` or any dependency has width other than `n`.
pub fn is_2nf(n: u32, fds: &[Fd]) -> bool {
    check_universe(n, fds);
    let keys = candidate_keys(n, fds);
    check_2nf(n, fds, &keys)
}

fn prime_union(n: u32, keys: &[AttrSet]) -> AttrSet {
    keys.iter().fold(AttrSet::empty(n), |acc, key| acc | *key)
}

fn check_3nf(n: u32, fds: &[Fd], keys: &[AttrSet]) -> bool {
    let prime = prime_union(n, keys);
    for fd in fds.iter().filter(|fd| !fd.is_trivial()) {
        let contributes_prime = fd.rhs().is_subset_of(&prime);
        let superkey_lhs = keys.iter().any(|key| key.is_subset_of(&fd.lhs()));
        if !contributes_prime && !superkey_lhs {
            return false;
        }
    }
    true
}

fn check_2nf(n: u32, fds: &[Fd], keys: &[AttrSet]) -> bool {
    let prime = prime_union(n, keys);
    for fd in fds.iter().filter(|fd| !fd.is_trivial()) {
        let partial = keys.iter().any(|key| fd.lhs().is_proper_subset_of(key));
        let non_prime_dependent = !fd.rhs().is_subset_of(&prime);
        if partial && non_prime_dependent {
            return false;
        }
    }
    true
}

/// The outcome of classifying one dependency set.
///
/// The flags are cumulative: `bcnf` implies `third`, `third` implies
/// `second`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Classification {
    pub bcnf: bool,
    pub third: bool,
    pub second: bool,
}

/// Classifies a relation into the normal-form ladder, computing candidate
/// keys once and short-circuiting: a relation in BCNF is reported as being
/// in 3NF and 2NF without running those checks.
///
/// # Panics
///
/// Panics if `n > 64` or any dependency has width other than `n`.
pub fn classify(n: u32, fds: &[Fd]) -> Classification {
    if is_bcnf(n, fds) {
        return Classification { bcnf: true, third: true, second: true };
    }
    let keys = candidate_keys(n, fds);
    let third = check_3nf(n, fds, &keys);
    let second = third || check_2nf(n, fds, &keys);
    Classification { bcnf: false, third, second }
}

#[cfg(test)]
mod tests {
    use crate::random::FdGenerator;

    use super::*;

    fn set(bits: u64) -> AttrSet {
        AttrSet::from_bits(5, bits)
    }

    fn fd(lhs: u64, rhs: u64) -> Fd {
        Fd::new(set(lhs), set(rhs))
    }

    fn fd3(lhs: u64, rhs: u64) -> Fd {
        Fd::new(AttrSet::from_bits(3, lhs), AttrSet::from_bits(3, rhs))
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
    fn test_bcnf_worked_examples() {
        // B -> C has a non-superkey determinant.
        assert!(!is_bcnf(5, &schema()));

        // AB -> CDE, AC -> BDE, BC -> C (trivial): both determinants are keys.
        let bcnf = vec![fd(0b00011, 0b11100), fd(0b00101, 0b11010), fd(0b00110, 0b00100)];
        assert!(is_bcnf(5, &bcnf));
    }

    #[test]
    fn test_3nf_transitive_dependency() {
        // A -> B, B -> C: B -> C is a transitive dependency on the key {A},
        // but no composite key exists, so 2NF still holds.
        let fds = vec![fd3(0b001, 0b010), fd3(0b010, 0b100)];
        assert!(!is_3nf(3, &fds));
        assert!(is_2nf(3, &fds));
        assert_eq!(
            classify(3, &fds),
            Classification { bcnf: false, third: false, second: true }
        );
    }

    #[test]
    fn test_3nf_prime_dependent() {
        // AB -> C, C -> A: C is not a superkey but A is prime, so 3NF holds
        // while BCNF does not.
        let fds = vec![fd3(0b011, 0b100), fd3(0b100, 0b001)];
        assert!(!is_bcnf(3, &fds));
        assert!(is_3nf(3, &fds));
        assert!(is_2nf(3, &fds));
    }

    #[test]
    fn test_2nf_partial_dependency() {
        // AB -> C, B -> C with candidate key AB: B -> C is a partial
        // dependency of a non-prime attribute.
        let fds = vec![fd3(0b011, 0b100), fd3(0b010, 0b100)];
        assert!(!is_2nf(3, &fds));
        assert!(!is_3nf(3, &fds));
        assert_eq!(
            classify(3, &fds),
            Classification { bcnf: false, third: false, second: false }
        );
    }

    #[test]
    fn test_trivial_and_empty() {
        // No dependencies: everything holds vacuously.
        assert!(is_bcnf(4, &[]));
        assert!(is_3nf(4, &[]));
        assert!(is_2nf(4, &[]));

        // Only trivial dependencies behave like none at all.
        let trivial = vec![fd(0b00110, 0b00010)];
        assert_eq!(
            classify(5, &trivial),
            Classification { bcnf: true, third: true, second: true }
        );
    }

    #[test]
    fn test_classify_matches_predicates() {
        for fds in [schema(), vec![fd3(0b011, 0b100), fd3(0b010, 0b100)]] {
            let n = fds[0].width();
            let c = classify(n, &fds);
            // Short-circuiting must never contradict the standalone checks.
            assert_eq!(c.bcnf, is_bcnf(n, &fds));
            assert_eq!(c.third, c.bcnf || is_3nf(n, &fds));
            assert_eq!(c.second, c.third || is_2nf(n, &fds));
        }
    }

    #[test]
    fn test_ladder_on_random_samples() {
        // BCNF implies 3NF implies 2NF, on every sample, not just the fixed
        // examples. Seeded generation keeps the test deterministic.
        let mut generator = FdGenerator::seeded(4, 20240819);
        for round in 0..50 {
            let m = 1 + round % 5;
            let fds = generator.fds(m);
            let bcnf = is_bcnf(4, &fds);
            let third = is_3nf(4, &fds);
            let second = is_2nf(4, &fds);
            if bcnf {
                assert!(third, "BCNF sample not in 3NF: {:?}", fds);
            }
            if third {
                assert!(second, "3NF sample not in 2NF: {:?}", fds);
            }
        }
    }
}
