//! # Quine-McCluskey Logic Minimizer
//!
//! This crate minimizes a single-output Boolean function, given as a set of
//! required minterms and optional don't-cares over up to [`MAX_VARS`]
//! variables, into a minimum-size sum-of-products cover.
//!
//! ## Overview
//!
//! Minimization runs in three stages:
//!
//! - **Prime-implicant generation**: level-0 terms (one per input row) are
//!   merged bottom-up with bitwise operations until no merges remain; every
//!   maximal term is a prime implicant.
//! - **Covering**: minterms with a single coverer force their prime into
//!   the cover (essential primes); the residual minimum-set-cover problem
//!   is solved exactly by branch-and-bound, or greedily when the instance
//!   is large.
//! - **Rendering**: the selected implicants become a literal SOP string.
//!
//! ## Usage
//!
//! ```
//! use qmc_logic::BoolFunction;
//!
//! # fn main() -> Result<(), qmc_logic::MinimizeError> {
//! let f = BoolFunction::new(3, &[0, 2, 5, 7], &[])?;
//! let result = f.minimize(&["A", "B", "C"])?;
//!
//! assert_eq!(result.expression(), "A'C' + AC");
//! assert!(result.is_exact());
//!
//! // The full prime-implicant list is available alongside the cover.
//! for prime in result.prime_implicants() {
//!     println!("{}: covers {:?}", prime.pattern(3), prime.covered().iter().collect::<Vec<_>>());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Don't-cares widen implicants without becoming coverage targets:
//!
//! ```
//! use qmc_logic::BoolFunction;
//!
//! # fn main() -> Result<(), qmc_logic::MinimizeError> {
//! let f = BoolFunction::new(4, &[0, 1, 2, 5, 6, 7, 8, 9, 14], &[3, 11])?;
//! let result = f.minimize(&["A", "B", "C", "D"])?;
//! assert!(result.is_exact());
//! # Ok(())
//! # }
//! ```
//!
//! ## Bounding worst-case latency
//!
//! The exact search is exponential in the worst case. Callers can cap it
//! with a node budget; expiry is a distinct error, never a silently
//! degraded cover:
//!
//! ```
//! use qmc_logic::{BoolFunction, CoverStrategy, MinimizeConfig, MinimizeError};
//!
//! # fn main() -> Result<(), qmc_logic::MinimizeError> {
//! let f = BoolFunction::new(3, &[0, 1, 2, 5, 6, 7], &[])?;
//! let config = MinimizeConfig {
//!     strategy: CoverStrategy::Exact,
//!     node_budget: Some(1),
//!     ..Default::default()
//! };
//!
//! match f.minimize_with_config(&["A", "B", "C"], &config) {
//!     Err(MinimizeError::BudgetExhausted { .. }) => {
//!         // Retry greedily; the result reports is_exact() == false.
//!         let greedy = MinimizeConfig {
//!             strategy: CoverStrategy::Greedy,
//!             ..Default::default()
//!         };
//!         let result = f.minimize_with_config(&["A", "B", "C"], &greedy)?;
//!         assert!(!result.is_exact());
//!     }
//!     other => { other?; }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Each minimization call owns all of its state, so independent calls from
//! multiple threads need no locking.

// Public modules
pub mod error;
pub mod function;
pub mod implicant;
pub mod rowset;

// Internal pipeline stages
mod cover;
mod generator;
mod render;

// Re-export high-level public API
pub use error::MinimizeError;
pub use function::{BoolFunction, Minimization};
pub use implicant::Implicant;
pub use rowset::RowSet;

/// Maximum supported variable count.
///
/// The row space is `2^num_vars`, so this is a hard ceiling; practical
/// instances usually stay well below it.
pub const MAX_VARS: usize = 20;

/// Configuration for the covering phase
///
/// The defaults reproduce the standard behavior: exact branch-and-bound
/// for small residual problems, greedy above the size thresholds, no node
/// budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizeConfig {
    /// How to solve the residual cover after essential extraction
    pub strategy: CoverStrategy,
    /// Auto mode switches to greedy above this many residual candidates
    pub exact_candidate_limit: usize,
    /// Auto mode switches to greedy above this many uncovered minterms
    pub exact_minterm_limit: usize,
    /// Cap on explored branch-and-bound nodes; `None` means unbounded
    pub node_budget: Option<u64>,
}

impl Default for MinimizeConfig {
    fn default() -> Self {
        MinimizeConfig {
            strategy: CoverStrategy::Auto,
            exact_candidate_limit: 50,
            exact_minterm_limit: 30,
            node_budget: None,
        }
    }
}

impl MinimizeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Residual-cover solving mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverStrategy {
    /// Exact below the size thresholds, greedy above them
    #[default]
    Auto,
    /// Always branch-and-bound, regardless of instance size
    Exact,
    /// Always greedy; results are tagged non-exact
    Greedy,
}
