//! Implicant (generalized product term) representation
//!
//! An implicant is a `(value, mask, covered)` triple: `value` holds the
//! fixed bit pattern, `mask` marks the merged-out (don't-care) positions,
//! and `covered` records which original truth-table rows the term subsumes.
//! Bit `i` of `value`/`mask` corresponds to the variable at position
//! `num_vars - 1 - i` in the variable-name list, so bit `num_vars - 1` is
//! the most significant variable.

use crate::rowset::RowSet;

/// A product term over up to 20 binary variables.
///
/// Invariant: `value & mask == 0` — masked positions are normalized to zero,
/// so `(value, mask)` is a unique signature for the term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Implicant {
    pub(crate) value: u32,
    pub(crate) mask: u32,
    pub(crate) covered: RowSet,
}

impl Implicant {
    /// Build a level-0 implicant for a single truth-table row.
    pub(crate) fn from_row(row: usize, capacity: usize) -> Self {
        Implicant {
            value: row as u32,
            mask: 0,
            covered: RowSet::singleton(capacity, row),
        }
    }

    pub(crate) fn new(value: u32, mask: u32, covered: RowSet) -> Self {
        debug_assert_eq!(value & mask, 0, "masked positions must be zero");
        Implicant { value, mask, covered }
    }

    /// Fixed bit pattern (zero at every masked position).
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Don't-care position mask.
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// The `(value, mask)` pair identifying this term.
    pub(crate) fn signature(&self) -> (u32, u32) {
        (self.value, self.mask)
    }

    /// Rows (minterms and don't-cares) subsumed by this term.
    pub fn covered(&self) -> &RowSet {
        &self.covered
    }

    /// True when this term subsumes `row`.
    pub fn covers(&self, row: usize) -> bool {
        self.covered.contains(row)
    }

    /// Number of rows the term spans: `2^popcount(mask)`.
    pub fn size(&self) -> usize {
        1usize << self.mask.count_ones()
    }

    /// PLA-style pattern string, most significant variable first.
    ///
    /// Masked positions print as `-`:
    ///
    /// ```
    /// use qmc_logic::BoolFunction;
    ///
    /// # fn main() -> Result<(), qmc_logic::MinimizeError> {
    /// let f = BoolFunction::new(3, &[5], &[])?;
    /// let result = f.minimize(&["A", "B", "C"])?;
    /// assert_eq!(result.prime_implicants()[0].pattern(3), "101");
    /// # Ok(())
    /// # }
    /// ```
    pub fn pattern(&self, num_vars: usize) -> String {
        let mut out = String::with_capacity(num_vars);
        for i in (0..num_vars).rev() {
            let bit = 1u32 << i;
            if self.mask & bit != 0 {
                out.push('-');
            } else if self.value & bit != 0 {
                out.push('1');
            } else {
                out.push('0');
            }
        }
        out
    }

    /// Render this term as a product of literals.
    ///
    /// Unmasked positions emit the variable name, with a `'` suffix when the
    /// value bit is zero; masked positions are skipped. A fully masked term
    /// renders as the constant `"1"`.
    pub fn product<S: AsRef<str>>(&self, num_vars: usize, names: &[S]) -> String {
        let mut out = String::new();
        for i in (0..num_vars).rev() {
            let bit = 1u32 << i;
            if self.mask & bit != 0 {
                continue;
            }
            out.push_str(names[num_vars - 1 - i].as_ref());
            if self.value & bit == 0 {
                out.push('\'');
            }
        }
        if out.is_empty() {
            out.push('1');
        }
        out
    }
}
