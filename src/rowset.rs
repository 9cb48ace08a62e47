//! Bit-set over truth-table row indices
//!
//! Minterm and don't-care sets range over `[0, 2^num_vars)`, which exceeds a
//! single machine word once `num_vars` passes 6. [`RowSet`] wraps a
//! [`BitVec`] sized to the full row space so set operations stay correct at
//! high variable counts.

use bitvec::vec::BitVec;

/// A set of truth-table row indices, fixed to the `2^num_vars` row space.
///
/// All sets participating in one minimization share the same capacity, so
/// binary operations never have to reconcile lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSet {
    bits: BitVec,
}

impl RowSet {
    /// Create an empty set over `capacity` rows.
    pub fn new(capacity: usize) -> Self {
        RowSet {
            bits: BitVec::repeat(false, capacity),
        }
    }

    /// Create a set over `capacity` rows containing exactly `row`.
    pub fn singleton(capacity: usize, row: usize) -> Self {
        let mut set = RowSet::new(capacity);
        set.insert(row);
        set
    }

    /// Number of rows the set ranges over (not the number of members).
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Add `row` to the set.
    ///
    /// # Panics
    ///
    /// Panics if `row >= capacity`. Row indices are validated at the API
    /// boundary, so an out-of-range row here is an internal invariant
    /// violation.
    pub fn insert(&mut self, row: usize) {
        self.bits.set(row, true);
    }

    /// Remove `row` from the set.
    pub fn remove(&mut self, row: usize) {
        self.bits.set(row, false);
    }

    /// Test membership of `row`.
    pub fn contains(&self, row: usize) -> bool {
        self.bits.get(row).map(|bit| *bit).unwrap_or(false)
    }

    /// Number of rows in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// True when the set has no members.
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Add every member of `other` to this set.
    pub fn union_with(&mut self, other: &RowSet) {
        for row in other.bits.iter_ones() {
            self.bits.set(row, true);
        }
    }

    /// Remove every member of `other` from this set.
    pub fn subtract(&mut self, other: &RowSet) {
        for row in other.bits.iter_ones() {
            self.bits.set(row, false);
        }
    }

    /// Drop every member not also present in `other`.
    pub fn intersect_with(&mut self, other: &RowSet) {
        for row in self.bits.iter_ones().collect::<Vec<_>>() {
            if !other.contains(row) {
                self.bits.set(row, false);
            }
        }
    }

    /// Count the members shared with `other`.
    pub fn intersection_len(&self, other: &RowSet) -> usize {
        self.bits.iter_ones().filter(|&row| other.contains(row)).count()
    }

    /// True when the sets share at least one member.
    pub fn intersects(&self, other: &RowSet) -> bool {
        self.bits.iter_ones().any(|row| other.contains(row))
    }

    /// True when every member of this set is also in `other`.
    pub fn is_subset_of(&self, other: &RowSet) -> bool {
        self.bits.iter_ones().all(|row| other.contains(row))
    }

    /// Iterate members in ascending row order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl FromIterator<usize> for RowSet {
    /// Collect rows into a set sized to hold the largest row.
    ///
    /// Mostly useful in tests; production call sites size the set to the
    /// full row space with [`RowSet::new`].
    fn from_iter<I: IntoIterator<Item = usize>>(rows: I) -> Self {
        let rows: Vec<usize> = rows.into_iter().collect();
        let capacity = rows.iter().max().map(|&r| r + 1).unwrap_or(0);
        let mut set = RowSet::new(capacity);
        for row in rows {
            set.insert(row);
        }
        set
    }
}
