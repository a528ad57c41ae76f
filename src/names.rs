//! Translation between attribute names and bit positions.
//!
//! The core algorithms only ever see [`AttrSet`] values of a fixed width;
//! this adapter owns the mapping from human-readable attribute names to
//! dense bit positions and back. Names are de-duplicated and sorted, so the
//! same set of names always produces the same encoding.

use crate::attrs::AttrSet;
use crate::fd::Fd;

/// A fixed universe of named attributes, mapped to bit positions
/// `0..width` in sorted name order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AttrNames {
    names: Vec<String>,
}

impl AttrNames {
    /// Builds a universe from attribute name tokens. Duplicates are
    /// collapsed; the sorted distinct names define the bit positions.
    ///
    /// # Panics
    ///
    /// Panics if more than 64 distinct names are given.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        assert!(names.len() <= 64, "Attribute universe is limited to 64 names");
        AttrNames { names }
    }

    /// Returns the width of the universe.
    pub fn width(&self) -> u32 {
        self.names.len() as u32
    }

    /// Returns the name at a bit position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width`.
    pub fn name(&self, index: u32) -> &str {
        &self.names[index as usize]
    }

    /// Returns the bit position of a name, if it is part of the universe.
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).ok().map(|i| i as u32)
    }

    /// Encodes a list of names as an attribute set.
    ///
    /// # Panics
    ///
    /// Panics if any name is not part of the universe.
    pub fn set_of(&self, names: &[&str]) -> AttrSet {
        let mut set = AttrSet::empty(self.width());
        for name in names {
            let index = self
                .index_of(name)
                .unwrap_or_else(|| panic!("Unknown attribute name: {:?}", name));
            set = set.with_bit(index);
        }
        set
    }

    /// Encodes a named dependency `lhs -> rhs`.
    ///
    /// # Panics
    ///
    /// Panics if any name is not part of the universe.
    pub fn fd_of(&self, lhs: &[&str], rhs: &[&str]) -> Fd {
        Fd::new(self.set_of(lhs), self.set_of(rhs))
    }

    /// Decodes an attribute set back into sorted names.
    ///
    /// # Panics
    ///
    /// Panics if the set has a different width than the universe.
    pub fn names_of(&self, set: AttrSet) -> Vec<&str> {
        assert_eq!(set.width(), self.width(), "Attribute set from a different universe");
        set.iter().map(|index| self.name(index)).collect()
    }

    /// Formats a set as `{A,B,C}`.
    pub fn format_set(&self, set: AttrSet) -> String {
        format!("{{{}}}", self.names_of(set).join(","))
    }

    /// Formats a dependency as `{A,B} -> {C}`.
    pub fn format_fd(&self, fd: Fd) -> String {
        format!("{} -> {}", self.format_set(fd.lhs()), self.format_set(fd.rhs()))
    }
}
