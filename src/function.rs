//! Boolean function input and the minimization entry point
//!
//! [`BoolFunction`] holds a validated minterm/don't-care specification;
//! [`BoolFunction::minimize`] runs the full pipeline (prime-implicant
//! generation, covering, rendering) and returns a [`Minimization`] bundle.

use log::debug;

use crate::cover::{self, CoverSolution};
use crate::error::MinimizeError;
use crate::generator;
use crate::implicant::Implicant;
use crate::render;
use crate::{MinimizeConfig, MAX_VARS};

/// A single-output Boolean function given by minterms and don't-cares.
///
/// Row indices are validated against `[0, 2^num_vars)` at construction;
/// out-of-range rows are rejected, never clamped. A row present in both
/// sets is treated as a required minterm: the don't-care set is stripped of
/// minterm rows, so such a row always ends up covered.
///
/// # Examples
///
/// ```
/// use qmc_logic::BoolFunction;
///
/// # fn main() -> Result<(), qmc_logic::MinimizeError> {
/// let f = BoolFunction::new(3, &[0, 2, 5, 7], &[])?;
/// let result = f.minimize(&["A", "B", "C"])?;
/// assert_eq!(result.expression(), "A'C' + AC");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolFunction {
    num_vars: usize,
    minterms: Vec<usize>,
    dont_cares: Vec<usize>,
}

impl BoolFunction {
    /// Create a function over `num_vars` variables.
    ///
    /// # Errors
    ///
    /// [`MinimizeError::UnsupportedVariableCount`] when `num_vars` is zero
    /// or above [`MAX_VARS`]; [`MinimizeError::RowOutOfRange`] when any row
    /// index is `>= 2^num_vars`.
    pub fn new(
        num_vars: usize,
        minterms: &[usize],
        dont_cares: &[usize],
    ) -> Result<Self, MinimizeError> {
        if num_vars == 0 || num_vars > MAX_VARS {
            return Err(MinimizeError::UnsupportedVariableCount {
                requested: num_vars,
                max: MAX_VARS,
            });
        }
        let limit = 1usize << num_vars;
        for &row in minterms.iter().chain(dont_cares.iter()) {
            if row >= limit {
                return Err(MinimizeError::RowOutOfRange { row, limit });
            }
        }

        let mut minterms: Vec<usize> = minterms.to_vec();
        minterms.sort_unstable();
        minterms.dedup();

        // Minterm set wins: a row in both sets stays a coverage target.
        let mut dont_cares: Vec<usize> = dont_cares
            .iter()
            .copied()
            .filter(|row| minterms.binary_search(row).is_err())
            .collect();
        dont_cares.sort_unstable();
        dont_cares.dedup();

        Ok(BoolFunction {
            num_vars,
            minterms,
            dont_cares,
        })
    }

    /// Number of input variables.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Required minterm rows, sorted and deduplicated.
    pub fn minterms(&self) -> &[usize] {
        &self.minterms
    }

    /// Don't-care rows, sorted, deduplicated, disjoint from the minterms.
    pub fn dont_cares(&self) -> &[usize] {
        &self.dont_cares
    }

    /// Minimize with the default configuration.
    ///
    /// `names` orders the variables most significant first and must supply
    /// at least `num_vars` entries; extras are ignored.
    pub fn minimize<S: AsRef<str>>(&self, names: &[S]) -> Result<Minimization, MinimizeError> {
        self.minimize_with_config(names, &MinimizeConfig::default())
    }

    /// Minimize with an explicit configuration.
    ///
    /// # Errors
    ///
    /// [`MinimizeError::MissingVariableNames`] when `names` is shorter than
    /// `num_vars`; [`MinimizeError::BudgetExhausted`] when a node budget
    /// expires before the exact search completes.
    pub fn minimize_with_config<S: AsRef<str>>(
        &self,
        names: &[S],
        config: &MinimizeConfig,
    ) -> Result<Minimization, MinimizeError> {
        if names.len() < self.num_vars {
            return Err(MinimizeError::MissingVariableNames {
                provided: names.len(),
                required: self.num_vars,
            });
        }

        // Don't-cares participate in merging but not in the coverage target.
        let mut rows: Vec<usize> = self
            .minterms
            .iter()
            .chain(self.dont_cares.iter())
            .copied()
            .collect();
        rows.sort_unstable();

        let primes = generator::prime_implicants(self.num_vars, &rows);
        let CoverSolution {
            essential,
            selected,
            exact,
        } = cover::solve(self.num_vars, &self.minterms, &primes, config)?;
        let expression =
            render::sop_expression(selected.iter().map(|&i| &primes[i]), self.num_vars, names);
        debug!(
            "minimized {} minterms to {} of {} primes ({})",
            self.minterms.len(),
            selected.len(),
            primes.len(),
            if exact { "exact" } else { "greedy" }
        );

        Ok(Minimization {
            num_vars: self.num_vars,
            expression,
            primes,
            essential,
            selected,
            exact,
        })
    }
}

/// Result of one minimization call.
///
/// Holds the rendered expression, the complete prime-implicant list, and
/// the essential/selected subsets as indices into that list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimization {
    num_vars: usize,
    expression: String,
    primes: Vec<Implicant>,
    essential: Vec<usize>,
    selected: Vec<usize>,
    exact: bool,
}

impl Minimization {
    /// The minimized sum-of-products expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Number of input variables.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Every prime implicant of the function, with its covered-row set.
    pub fn prime_implicants(&self) -> &[Implicant] {
        &self.primes
    }

    /// Indices of the essential primes, ascending.
    pub fn essential_indices(&self) -> &[usize] {
        &self.essential
    }

    /// Indices of the selected cover, essentials first.
    pub fn selected_indices(&self) -> &[usize] {
        &self.selected
    }

    /// Iterate the essential prime implicants.
    pub fn essential_implicants(&self) -> impl Iterator<Item = &Implicant> {
        self.essential.iter().map(move |&i| &self.primes[i])
    }

    /// Iterate the selected cover.
    pub fn selected_implicants(&self) -> impl Iterator<Item = &Implicant> {
        self.selected.iter().map(move |&i| &self.primes[i])
    }

    /// True when the selection is provably minimum.
    ///
    /// Greedy covers report `false`; so would any future mode that trades
    /// optimality for speed. An exact result is never silently downgraded.
    pub fn is_exact(&self) -> bool {
        self.exact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoverStrategy;

    const NAMES: [&str; 4] = ["A", "B", "C", "D"];

    #[test]
    fn test_rejects_zero_variables() {
        let err = BoolFunction::new(0, &[], &[]).unwrap_err();
        assert_eq!(
            err,
            MinimizeError::UnsupportedVariableCount {
                requested: 0,
                max: MAX_VARS
            }
        );
    }

    #[test]
    fn test_rejects_too_many_variables() {
        let err = BoolFunction::new(MAX_VARS + 1, &[], &[]).unwrap_err();
        assert!(matches!(
            err,
            MinimizeError::UnsupportedVariableCount { .. }
        ));
    }

    #[test]
    fn test_rejects_out_of_range_minterm() {
        let err = BoolFunction::new(3, &[8], &[]).unwrap_err();
        assert_eq!(err, MinimizeError::RowOutOfRange { row: 8, limit: 8 });
    }

    #[test]
    fn test_rejects_out_of_range_dont_care() {
        let err = BoolFunction::new(3, &[0], &[9]).unwrap_err();
        assert_eq!(err, MinimizeError::RowOutOfRange { row: 9, limit: 8 });
    }

    #[test]
    fn test_rejects_short_name_list() {
        let f = BoolFunction::new(3, &[1], &[]).unwrap();
        let err = f.minimize(&["A", "B"]).unwrap_err();
        assert_eq!(
            err,
            MinimizeError::MissingVariableNames {
                provided: 2,
                required: 3
            }
        );
    }

    #[test]
    fn test_input_normalization() {
        let f = BoolFunction::new(3, &[5, 2, 5, 0], &[3, 5, 3]).unwrap();
        assert_eq!(f.minterms(), &[0, 2, 5]);
        // Row 5 appears in both sets; the minterm set wins.
        assert_eq!(f.dont_cares(), &[3]);
    }

    #[test]
    fn test_minterm_wins_over_dont_care() {
        // Row 5 as both minterm and don't-care must stay required: compare
        // with dropping it from the don't-care list entirely.
        let both = BoolFunction::new(3, &[5], &[5]).unwrap();
        let plain = BoolFunction::new(3, &[5], &[]).unwrap();
        assert_eq!(both, plain);
        let result = both.minimize(&NAMES[..3]).unwrap();
        assert_eq!(result.expression(), "AB'C");
    }

    #[test]
    fn test_empty_function_renders_zero() {
        let f = BoolFunction::new(3, &[], &[]).unwrap();
        let result = f.minimize(&NAMES[..3]).unwrap();
        assert_eq!(result.expression(), "0");
        assert!(result.prime_implicants().is_empty());
        assert!(result.selected_indices().is_empty());
        assert!(result.is_exact());
    }

    #[test]
    fn test_full_function_renders_one() {
        let minterms: Vec<usize> = (0..8).collect();
        let f = BoolFunction::new(3, &minterms, &[]).unwrap();
        let result = f.minimize(&NAMES[..3]).unwrap();
        assert_eq!(result.expression(), "1");
        assert_eq!(result.selected_indices().len(), 1);
    }

    #[test]
    fn test_single_minterm_renders_canonical_term() {
        let f = BoolFunction::new(3, &[5], &[]).unwrap();
        let result = f.minimize(&NAMES[..3]).unwrap();
        assert_eq!(result.expression(), "AB'C");
        assert!(result.is_exact());
    }

    #[test]
    fn test_two_term_cover_with_essentials() {
        let f = BoolFunction::new(3, &[0, 2, 5, 7], &[]).unwrap();
        let result = f.minimize(&NAMES[..3]).unwrap();
        assert_eq!(result.expression(), "A'C' + AC");
        assert_eq!(result.essential_indices(), result.selected_indices());
        assert!(result.is_exact());
    }

    #[test]
    fn test_selected_accessors_are_consistent() {
        let f = BoolFunction::new(4, &[0, 1, 2, 5, 6, 7, 8, 9, 14], &[3, 11]).unwrap();
        let result = f.minimize(&NAMES).unwrap();
        let selected: Vec<_> = result.selected_implicants().collect();
        assert_eq!(selected.len(), result.selected_indices().len());
        for &minterm in f.minterms() {
            assert!(selected.iter().any(|p| p.covers(minterm)));
        }
    }

    #[test]
    fn test_greedy_strategy_is_tagged() {
        let f = BoolFunction::new(3, &[0, 1, 2, 5, 6, 7], &[]).unwrap();
        let config = MinimizeConfig {
            strategy: CoverStrategy::Greedy,
            ..Default::default()
        };
        let result = f.minimize_with_config(&NAMES[..3], &config).unwrap();
        assert!(!result.is_exact());
        for &minterm in f.minterms() {
            assert!(result.selected_implicants().any(|p| p.covers(minterm)));
        }
    }

    #[test]
    fn test_extra_names_are_ignored() {
        let f = BoolFunction::new(2, &[3], &[]).unwrap();
        let result = f.minimize(&NAMES).unwrap();
        assert_eq!(result.expression(), "AB");
    }
}
