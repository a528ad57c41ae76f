//! # fd-rs: Functional Dependency Analysis in Rust
//!
//! **`fd-rs`** computes the structural properties of a relational schema
//! from its declared **functional dependencies (FDs)**: attribute-set
//! closures, candidate keys, minimal covers (one, or *all* of them), and
//! classification into the normal forms **2NF**, **3NF**, and **BCNF**.
//! This is the classical machinery behind schema-design tools and
//! relational-theory coursework.
//!
//! ## How it works
//!
//! Attributes are bit positions in a fixed-width [`AttrSet`][crate::attrs::AttrSet],
//! so every set operation is a handful of word instructions. On top of that
//! sit a fixpoint **closure engine**, a pruned lattice search for
//! **candidate keys**, and the branching searches that enumerate every
//! minimal left- and right-reduction of a dependency set --- the engine
//! behind [`all_minimal_covers`][crate::cover::all_minimal_covers].
//!
//! ## Key Features
//!
//! - **Value semantics throughout**: sets and dependencies are immutable
//!   `Copy` values; the only mutable state lives inside one search call.
//! - **Deterministic**: subset enumeration, canonical FD ordering, and
//!   variant de-duplication make every result reproducible run to run.
//! - **Exhaustive where it counts**: the cover searches enumerate *all*
//!   minimal covers, of the literal input or (via
//!   [`sigma_plus_limited`][crate::sigma::sigma_plus_limited]) of the full
//!   implied dependency set.
//! - **Total functions**: no I/O, no recoverable errors; contract
//!   violations (mismatched widths, out-of-range bits) fail fast.
//!
//! ## Basic Usage
//!
//! ```rust
//! use fd_rs::names::AttrNames;
//! use fd_rs::keys::candidate_keys;
//! use fd_rs::nf::classify;
//!
//! // R(A,B,C,D,E) with AB -> CDE, AC -> BDE, B <-> C, C -> D, B -> E, C -> E
//! let names = AttrNames::new(["A", "B", "C", "D", "E"]);
//! let fds = vec![
//!     names.fd_of(&["A", "B"], &["C", "D", "E"]),
//!     names.fd_of(&["A", "C"], &["B", "D", "E"]),
//!     names.fd_of(&["B"], &["C"]),
//!     names.fd_of(&["C"], &["B"]),
//!     names.fd_of(&["C"], &["D"]),
//!     names.fd_of(&["B"], &["E"]),
//!     names.fd_of(&["C"], &["E"]),
//! ];
//!
//! // The candidate keys are AB and AC.
//! let keys = candidate_keys(names.width(), &fds);
//! let keys: Vec<_> = keys.iter().map(|k| names.format_set(*k)).collect();
//! assert_eq!(keys, vec!["{A,B}", "{A,C}"]);
//!
//! // B -> C has a non-superkey determinant, so the schema is not in BCNF.
//! let c = classify(names.width(), &fds);
//! assert!(!c.bcnf);
//! ```
//!
//! ## Core Components
//!
//! - **[`attrs`]**: fixed-width attribute sets and subset enumeration.
//! - **[`fd`]**: the dependency value type and canonical FD-set form.
//! - **[`closure`]**: the fixpoint closure engine everything rests on.
//! - **[`keys`]**: candidate-key enumeration and prime attributes.
//! - **[`cover`]**: single and exhaustive minimal-cover searches.
//! - **[`sigma`]**: the reduced generating set of the implication closure.
//! - **[`nf`]**: BCNF/3NF/2NF predicates and the classification ladder.
//! - **[`names`]**: attribute-name encoding at the API boundary.
//! - **[`random`]** and **[`sample`]**: random schema generation and the
//!   wall-clock-budgeted sampling harness built on top of the classifier.

pub mod attrs;
pub mod closure;
pub mod cover;
pub mod fd;
pub mod keys;
pub mod names;
pub mod nf;
pub mod random;
pub mod sample;
pub mod sigma;
