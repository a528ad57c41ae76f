//! Attribute-set closure under a set of functional dependencies.
//!
//! The closure of `X` under `F` is the largest attribute set derivable from
//! `X` by repeatedly applying dependencies in `F`: whenever the determinant
//! of a dependency is contained in the running set, its dependent side is
//! unioned in. The computation is a fixpoint scan and is both monotone
//! (`X ⊆ Y` implies `closure(X) ⊆ closure(Y)`) and idempotent.
//!
//! Everything else in the crate reduces to this operation: superkey tests,
//! candidate keys, redundancy checks in the cover searches, and the
//! normal-form predicates.

use crate::attrs::AttrSet;
use crate::fd::Fd;

/// Computes the closure of `x` under `fds`.
///
/// # Panics
///
/// Panics if any dependency has a different width than `x`.
pub fn closure(x: AttrSet, fds: &[Fd]) -> AttrSet {
    closure_excluding(x, fds, &[])
}

/// Computes the closure of `x` under `fds`, skipping every dependency that
/// is structurally equal to one in `exclude`.
///
/// The exclusion list is how callers ask "what would the closure be without
/// this dependency" while leaving the working set untouched; the right-hand
/// minimization uses it to test redundancy.
///
/// # Panics
///
/// Panics if any dependency has a different width than `x`.
pub fn closure_excluding(x: AttrSet, fds: &[Fd], exclude: &[Fd]) -> AttrSet {
    let mut result = x;
    let mut changed = true;
    while changed {
        changed = false;
        for fd in fds {
            if exclude.contains(fd) {
                continue;
            }
            if fd.lhs().is_subset_of(&result) {
                let grown = result | fd.rhs();
                if grown != result {
                    result = grown;
                    changed = true;
                }
            }
        }
    }
    result
}

/// Returns true if `x` determines every attribute of the universe.
pub fn is_superkey(x: AttrSet, fds: &[Fd]) -> bool {
    closure(x, fds).is_full()
}

/// Returns true if `fd` is a consequence of `fds`, i.e. its dependent side
/// is contained in the closure of its determinant.
pub fn implies(fds: &[Fd], fd: Fd) -> bool {
    fd.rhs().is_subset_of(&closure(fd.lhs(), fds))
}

/// Returns true if the two dependency sets have the same closure semantics:
/// every dependency of each set is a consequence of the other.
pub fn equivalent(f: &[Fd], g: &[Fd]) -> bool {
    f.iter().all(|&fd| implies(g, fd)) && g.iter().all(|&fd| implies(f, fd))
}
