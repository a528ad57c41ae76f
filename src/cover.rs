//! Minimal covers of functional-dependency sets.
//!
//! A minimal cover of `F` is an equivalent dependency set in which every
//! right-hand side is a single attribute, no determinant carries a
//! redundant attribute, and no dependency is implied by the others. This
//! module provides the normalization steps ([`decompose`], [`drop_trivial`],
//! [`compact`]), the single-result reductions ([`minimize_left`],
//! [`minimize_right`], [`minimal_cover`]), and the exhaustive branching
//! searches that enumerate *every* minimal left- or right-reduction
//! ([`minimize_left_all`], [`minimize_right_all`], [`all_minimal_covers`]).
//!
//! The exhaustive searches work over a worklist of *variants*: independent,
//! fully-copied snapshots of the working dependency list. Whenever a
//! position admits several incomparable minimal choices, the whole variant
//! forks, one copy per choice, because dependencies processed later must
//! test their closures against the already-reduced earlier positions of
//! their own copy. Nothing is shared between branches.
//!
//! # Complexity
//!
//! Enumerating all minimal covers is exponential in the number of
//! attributes and dependencies. The searches here are exact and
//! deterministic; callers needing bounded latency must cap the universe or
//! impose an external timeout.

use log::debug;

use crate::attrs::{AttrSet, Combinations};
use crate::closure::closure;
use crate::fd::{canonicalize, Fd};

/// One entry of a right-reduction working set.
///
/// Dropping a dependency tombstones its slot instead of shifting the list,
/// so positions stay stable for the whole pass.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Slot {
    Present(Fd),
    Removed,
}

impl Slot {
    fn fd(&self) -> Option<Fd> {
        match self {
            Slot::Present(fd) => Some(*fd),
            Slot::Removed => None,
        }
    }
}

/// Closure of `x` under the live slots, optionally skipping one position.
///
/// Skipping by position (rather than by value) keeps duplicated
/// dependencies honest: only the occurrence under test is ignored.
fn slot_closure(x: AttrSet, slots: &[Slot], skip: Option<usize>) -> AttrSet {
    let mut result = x;
    let mut changed = true;
    while changed {
        changed = false;
        for (index, slot) in slots.iter().enumerate() {
            if Some(index) == skip {
                continue;
            }
            if let Slot::Present(fd) = slot {
                if fd.lhs().is_subset_of(&result) {
                    let grown = result | fd.rhs();
                    if grown != result {
                        result = grown;
                        changed = true;
                    }
                }
            }
        }
    }
    result
}

/// Splits every dependency into one dependency per attribute of its
/// right-hand side. Lossless: the conjunction of the singleton consequences
/// is equivalent to the original. A dependency with an empty right-hand
/// side contributes nothing.
pub fn decompose(fds: &[Fd]) -> Vec<Fd> {
    let mut out = Vec::new();
    for fd in fds {
        for index in fd.rhs().iter() {
            out.push(Fd::new(fd.lhs(), AttrSet::singleton(fd.width(), index)));
        }
    }
    out
}

/// Removes every trivial dependency (`rhs ⊆ lhs`), preserving order.
pub fn drop_trivial(fds: &[Fd]) -> Vec<Fd> {
    fds.iter().filter(|fd| !fd.is_trivial()).copied().collect()
}

/// Merges dependencies with identical determinants by uniting their
/// right-hand sides (the inverse of [`decompose`]). First-occurrence order
/// of determinants is preserved.
pub fn compact(fds: &[Fd]) -> Vec<Fd> {
    let mut out: Vec<Fd> = Vec::new();
    for fd in fds {
        match out.iter_mut().find(|seen| seen.lhs() == fd.lhs()) {
            Some(seen) => *seen = Fd::new(seen.lhs(), seen.rhs() | fd.rhs()),
            None => out.push(*fd),
        }
    }
    out
}

/// Left-reduces every dependency, producing a single result.
///
/// For each dependency with a composite determinant, attributes are dropped
/// one by one (ascending bit order) whenever the reduced determinant still
/// implies the right-hand side under the *current* working set, so later
/// tests see earlier reductions. The result is canonicalized (sorted,
/// de-duplicated).
pub fn minimize_left(fds: &[Fd]) -> Vec<Fd> {
    let mut working = fds.to_vec();
    for index in 0..working.len() {
        if working[index].lhs().count_ones() <= 1 {
            continue;
        }
        let rhs = working[index].rhs();
        let mut lhs = working[index].lhs();
        for bit in 0..lhs.width() {
            if !lhs.contains(bit) {
                continue;
            }
            let reduced = lhs.without_bit(bit);
            if rhs.is_subset_of(&closure(reduced, &working)) {
                debug!("minimize_left: {} -> {} shrinks to {} -> {}", lhs, rhs, reduced, rhs);
                lhs = reduced;
                working[index] = working[index].with_lhs(lhs);
            }
        }
    }
    canonicalize(&working)
}

/// All minimal determinants replacing `lhs` that still imply `rhs` under
/// `fds`, by size-ascending enumeration of its sub-determinants. Once a
/// minimal replacement is found, every superset of it is skipped, so the
/// returned sets form an antichain. Never empty: `lhs` itself qualifies
/// when nothing smaller does.
fn minimal_determinants(lhs: AttrSet, rhs: AttrSet, fds: &[Fd]) -> Vec<AttrSet> {
    let bits: Vec<u32> = lhs.iter().collect();
    let mut minimal: Vec<AttrSet> = Vec::new();
    for size in 1..=bits.len() as u32 {
        for pick in Combinations::new(bits.len() as u32, size) {
            let candidate =
                AttrSet::from_indices(lhs.width(), pick.iter().map(|i| bits[i as usize]));
            if minimal.iter().any(|m| m.is_subset_of(&candidate)) {
                continue;
            }
            if rhs.is_subset_of(&closure(candidate, fds)) {
                minimal.push(candidate);
            }
        }
    }
    minimal
}

/// Left-reduces exhaustively: returns every dependency set reachable by
/// choosing, at each position, one of the minimal determinants valid for
/// that variant. Trivial dependencies are dropped first. Variants are
/// canonicalized and de-duplicated, ordered by size then lexicographically.
pub fn minimize_left_all(fds: &[Fd]) -> Vec<Vec<Fd>> {
    let base = drop_trivial(fds);
    let mut variants: Vec<Vec<Fd>> = vec![base.clone()];

    for index in 0..base.len() {
        if base[index].lhs().count_ones() <= 1 {
            continue;
        }
        let rhs = base[index].rhs();
        // Forks created below must not be reprocessed at this position.
        let settled = variants.len();
        for v in 0..settled {
            let lhs = variants[v][index].lhs();
            let replacements = minimal_determinants(lhs, rhs, &variants[v]);
            let mut first = true;
            for replacement in replacements {
                let new_fd = Fd::new(replacement, rhs);
                if first {
                    variants[v][index] = new_fd;
                    first = false;
                    continue;
                }
                // A fork that merely duplicates a dependency already in the
                // variant collapses into it after de-duplication.
                let duplicate = variants[v]
                    .iter()
                    .enumerate()
                    .any(|(j, fd)| j != index && *fd == new_fd);
                if duplicate {
                    continue;
                }
                debug!("minimize_left_all: fork at position {} with {}", index, new_fd);
                let mut fork = variants[v].clone();
                fork[index] = new_fd;
                variants.push(fork);
            }
        }
    }

    let mut out: Vec<Vec<Fd>> = variants.iter().map(|v| canonicalize(v)).collect();
    out.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    out.dedup();
    out
}

/// Removes redundant dependencies, producing a single result.
///
/// Trivial dependencies are dropped first; then each dependency in turn is
/// tombstoned if its right-hand side is already implied by the remaining
/// live dependencies. Input order is preserved among the survivors.
pub fn minimize_right(fds: &[Fd]) -> Vec<Fd> {
    let mut slots: Vec<Slot> = drop_trivial(fds).into_iter().map(Slot::Present).collect();
    for index in 0..slots.len() {
        let fd = match slots[index] {
            Slot::Present(fd) => fd,
            Slot::Removed => continue,
        };
        if fd.rhs().is_subset_of(&slot_closure(fd.lhs(), &slots, Some(index))) {
            debug!("minimize_right: dropping redundant {}", fd);
            slots[index] = Slot::Removed;
        }
    }
    slots.iter().filter_map(Slot::fd).collect()
}

/// Returns true if every dependency of `small` occurs in `big`.
/// Both slices must be in canonical (sorted) form.
fn is_cover_subset(small: &[Fd], big: &[Fd]) -> bool {
    small.iter().all(|fd| big.binary_search(fd).is_ok())
}

/// Right-reduces exhaustively: at every position whose dependency is
/// redundant within a variant, the variant forks into a copy that drops it
/// and a copy that keeps it.
///
/// Naive branching produces many covers that are valid but strict supersets
/// of other produced covers, so a second pass is mandatory: variants are
/// canonicalized, sorted by size then lexicographically, de-duplicated, and
/// every variant containing a surviving smaller variant is discarded. Only
/// subset-minimal covers remain.
pub fn minimize_right_all(fds: &[Fd]) -> Vec<Vec<Fd>> {
    let base = drop_trivial(fds);
    let mut variants: Vec<Vec<Slot>> =
        vec![base.iter().copied().map(Slot::Present).collect()];

    for index in 0..base.len() {
        let mut next: Vec<Vec<Slot>> = Vec::with_capacity(variants.len());
        for variant in &variants {
            // This position has not been decided in any variant yet.
            let fd = match variant[index] {
                Slot::Present(fd) => fd,
                Slot::Removed => unreachable!("undecided slot cannot be removed"),
            };
            if fd.rhs().is_subset_of(&slot_closure(fd.lhs(), variant, Some(index))) {
                debug!("minimize_right_all: fork at position {} dropping {}", index, fd);
                let mut dropped = variant.clone();
                dropped[index] = Slot::Removed;
                next.push(dropped);
            }
            next.push(variant.clone());
        }
        variants = next;
    }

    let mut covers: Vec<Vec<Fd>> = variants
        .iter()
        .map(|slots| canonicalize(&slots.iter().filter_map(Slot::fd).collect::<Vec<_>>()))
        .collect();
    covers.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    covers.dedup();

    let mut kept: Vec<Vec<Fd>> = Vec::new();
    for cover in covers {
        if !kept.iter().any(|smaller| is_cover_subset(smaller, &cover)) {
            kept.push(cover);
        }
    }
    kept
}

/// Computes one minimal cover: decompose right-hand sides, drop trivial
/// dependencies, left-reduce, then remove redundant dependencies.
pub fn minimal_cover(fds: &[Fd]) -> Vec<Fd> {
    minimize_right(&minimize_left(&drop_trivial(&decompose(fds))))
}

/// Enumerates every minimal cover of `fds`: the exhaustive left-reduction
/// feeds each of its variants through the exhaustive right-reduction, and
/// the concatenated results are de-duplicated globally (covers compared as
/// sets, i.e. in canonical form).
///
/// To enumerate the minimal covers of the *implied* dependency set rather
/// than the literal input, widen the input with
/// [`sigma_plus_limited`](crate::sigma::sigma_plus_limited) first.
pub fn all_minimal_covers(fds: &[Fd]) -> Vec<Vec<Fd>> {
    let prepared = drop_trivial(&decompose(fds));
    let mut covers: Vec<Vec<Fd>> = Vec::new();
    for left_variant in minimize_left_all(&prepared) {
        covers.extend(minimize_right_all(&left_variant));
    }
    covers.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    covers.dedup();
    covers
}
