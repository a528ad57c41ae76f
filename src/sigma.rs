//! Reduced generating set for the implication closure of a dependency set.
//!
//! The full semantic closure Σ⁺ of a dependency set contains one dependency
//! `X -> closure(X)` for every attribute subset `X`, which is far more than
//! any cover search needs: every subset that properly contains a superkey
//! closes to the full universe and adds nothing that the superkey itself
//! does not already give. [`sigma_plus_limited`] therefore records one
//! dependency per subset *up to* a key and prunes everything above, using
//! the same lattice walk as the candidate-key search.
//!
//! Feeding the result into
//! [`all_minimal_covers`](crate::cover::all_minimal_covers) enumerates the
//! minimal covers of the implied dependency set rather than of the literal
//! input.

use log::debug;

use crate::attrs::AttrSet;
use crate::closure::closure;
use crate::cover::drop_trivial;
use crate::fd::{check_universe, Fd};
use crate::keys::combinations_excluding;

/// Computes the reduced generating set of the implication closure: one
/// `(subset, closure(subset))` dependency for every attribute subset that is
/// not a proper superset of a full-closure subset discovered earlier in the
/// walk.
///
/// Subsets are visited by ascending size, lexicographically within a size,
/// and the output keeps that order. Trivial input dependencies are ignored;
/// if none remain, the result is empty (a fully trivial set implies nothing
/// beyond reflexivity).
///
/// # Panics
///
/// Panics if `n > 64` or any dependency has width other than `n`.
pub fn sigma_plus_limited(n: u32, fds: &[Fd]) -> Vec<Fd> {
    check_universe(n, fds);
    let non_trivial = drop_trivial(fds);
    if non_trivial.is_empty() {
        return Vec::new();
    }

    let mut keys: Vec<AttrSet> = Vec::new();
    let mut sigma: Vec<Fd> = Vec::new();
    for c in 0..=n {
        for subset in combinations_excluding(n, c, &keys) {
            let closed = closure(subset, &non_trivial);
            sigma.push(Fd::new(subset, closed));
            if closed.is_full() {
                debug!("sigma_plus_limited: pruning above {}", subset);
                keys.push(subset);
            }
        }
    }
    sigma
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::closure::equivalent;
    use crate::cover::all_minimal_covers;

    use super::*;

    fn set(bits: u64) -> AttrSet {
        AttrSet::from_bits(3, bits)
    }

    fn fd(lhs: u64, rhs: u64) -> Fd {
        Fd::new(set(lhs), set(rhs))
    }

    #[test]
    fn test_chain() {
        // A -> B, B -> C: {A} closes to everything, so nothing above {A} is
        // recorded.
        let fds = vec![fd(0b001, 0b010), fd(0b010, 0b100)];
        let sigma = sigma_plus_limited(3, &fds);
        assert_eq!(
            sigma,
            vec![
                fd(0b000, 0b000),
                fd(0b001, 0b111),
                fd(0b010, 0b110),
                fd(0b100, 0b100),
                fd(0b110, 0b110),
            ]
        );
    }

    #[test]
    fn test_equivalent_to_input() {
        let fds = vec![fd(0b001, 0b010), fd(0b010, 0b100)];
        let sigma = sigma_plus_limited(3, &fds);
        assert!(equivalent(&fds, &sigma));
    }

    #[test]
    fn test_trivial_only() {
        assert!(sigma_plus_limited(3, &[]).is_empty());
        assert!(sigma_plus_limited(3, &[fd(0b011, 0b001)]).is_empty());
    }

    #[test]
    fn test_all_covers_of_implied_set() {
        // A <-> B <-> C: every attribute determines the others. The implied
        // dependency set has exactly five minimal covers: two 3-cycles and
        // three 2-cycle pairs.
        let fds = vec![fd(0b001, 0b010), fd(0b010, 0b100), fd(0b100, 0b001)];
        let sigma = sigma_plus_limited(3, &fds);
        assert_eq!(
            sigma,
            vec![fd(0b000, 0b000), fd(0b001, 0b111), fd(0b010, 0b111), fd(0b100, 0b111)]
        );

        let covers = all_minimal_covers(&sigma);
        assert_eq!(covers.len(), 5);
        for cover in &covers {
            assert!(equivalent(&fds, cover));
        }
        // Both cyclic orientations are among the enumerated covers.
        assert!(covers.contains(&vec![fd(0b001, 0b010), fd(0b010, 0b100), fd(0b100, 0b001)]));
        assert!(covers.contains(&vec![fd(0b001, 0b100), fd(0b010, 0b001), fd(0b100, 0b010)]));
    }
}
