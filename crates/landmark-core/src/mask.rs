//! Candidate masks over profile indices.

use std::fmt;
use std::ops::{BitAnd, Not};

use crate::profile::wrap_index;

/// One flag per profile index: `true` means "still a candidate".
///
/// Rule evaluation threads a mask through every rule of a rule set, each
/// rule seeing only the candidates its predecessors left standing.
///
/// # Example
///
/// ```
/// use landmark_core::IndexMask;
///
/// let mut mask = IndexMask::none(5);
/// mask.set(1, true);
/// mask.set(3, true);
///
/// assert_eq!(mask.count(), 2);
/// assert_eq!(mask.first(), Some(1));
/// assert_eq!(mask.last(), Some(3));
/// assert_eq!(mask.inverted().indices(), vec![0, 2, 4]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IndexMask {
    flags: Vec<bool>,
}

impl IndexMask {
    /// A mask of `len` candidates.
    pub fn all(len: usize) -> Self {
        Self {
            flags: vec![true; len],
        }
    }

    /// A mask of `len` indices with no candidates.
    pub fn none(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    pub fn from_fn(len: usize, f: impl FnMut(usize) -> bool) -> Self {
        Self {
            flags: (0..len).map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Flag at `index`; out-of-range indices read as `false`.
    pub fn get(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Sets the flag at `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: bool) {
        if let Some(flag) = self.flags.get_mut(index) {
            *flag = value;
        }
    }

    /// Sets the flag at a signed index, wrapping around the mask.
    pub fn set_wrapped(&mut self, index: isize, value: bool) {
        if self.flags.is_empty() {
            return;
        }
        let i = wrap_index(index, self.flags.len());
        self.flags[i] = value;
    }

    /// Number of candidates.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    pub fn has_candidates(&self) -> bool {
        self.flags.iter().any(|&f| f)
    }

    /// Lowest candidate index.
    pub fn first(&self) -> Option<usize> {
        self.flags.iter().position(|&f| f)
    }

    /// Highest candidate index.
    pub fn last(&self) -> Option<usize> {
        self.flags.iter().rposition(|&f| f)
    }

    /// Candidate indices, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| f.then_some(i))
    }

    pub fn indices(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Candidates present in both masks. The shorter length wins.
    pub fn and(&self, other: &IndexMask) -> IndexMask {
        IndexMask {
            flags: self
                .flags
                .iter()
                .zip(&other.flags)
                .map(|(&a, &b)| a && b)
                .collect(),
        }
    }

    /// Candidates present in either mask. The shorter length wins.
    pub fn or(&self, other: &IndexMask) -> IndexMask {
        IndexMask {
            flags: self
                .flags
                .iter()
                .zip(&other.flags)
                .map(|(&a, &b)| a || b)
                .collect(),
        }
    }

    /// Logical complement.
    pub fn inverted(&self) -> IndexMask {
        IndexMask {
            flags: self.flags.iter().map(|&f| !f).collect(),
        }
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}

impl From<Vec<bool>> for IndexMask {
    fn from(flags: Vec<bool>) -> Self {
        Self { flags }
    }
}

impl BitAnd for &IndexMask {
    type Output = IndexMask;

    fn bitand(self, rhs: Self) -> IndexMask {
        self.and(rhs)
    }
}

impl Not for IndexMask {
    type Output = IndexMask;

    fn not(self) -> IndexMask {
        self.inverted()
    }
}

impl fmt::Debug for IndexMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: String = self.flags.iter().map(|&b| if b { '1' } else { '0' }).collect();
        write!(f, "IndexMask({bits})")
    }
}
