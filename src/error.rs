//! Error types for the Quine-McCluskey minimizer
//!
//! This module provides programmatically distinguishable error variants with
//! detailed context, instead of string-based errors.

use std::fmt;
use std::io;

/// The main error type for the minimizer
///
/// Invalid inputs are rejected at construction rather than clamped or
/// wrapped; budget expiry is an operational outcome, reported separately
/// from validation failures so it can never be mistaken for a valid cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// The variable count is zero or exceeds the supported ceiling
    ///
    /// The engine supports 1 to [`MAX_VARS`](crate::MAX_VARS) variables;
    /// the 2^num_vars row space makes higher counts impractical regardless.
    UnsupportedVariableCount {
        /// The variable count that was requested
        requested: usize,
        /// The maximum supported variable count
        max: usize,
    },

    /// A minterm or don't-care row index is outside `[0, 2^num_vars)`
    RowOutOfRange {
        /// The offending row index
        row: usize,
        /// One past the largest valid row index (`2^num_vars`)
        limit: usize,
    },

    /// Fewer variable names were supplied than the function has variables
    MissingVariableNames {
        /// How many names were provided
        provided: usize,
        /// How many names are required (`num_vars`)
        required: usize,
    },

    /// The node budget expired before the exact search completed
    ///
    /// Any cover found so far is unproven, so none is returned. Callers
    /// that need a bounded answer should retry with
    /// [`CoverStrategy::Greedy`](crate::CoverStrategy::Greedy), whose
    /// result is tagged non-exact.
    BudgetExhausted {
        /// Number of search nodes explored before giving up
        explored: u64,
    },
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::UnsupportedVariableCount { requested, max } => write!(
                f,
                "Unsupported variable count {} (supported range: 1..={})",
                requested, max
            ),
            MinimizeError::RowOutOfRange { row, limit } => write!(
                f,
                "Row index {} out of range (valid range: 0..{})",
                row, limit
            ),
            MinimizeError::MissingVariableNames { provided, required } => write!(
                f,
                "Expected at least {} variable names, got {}",
                required, provided
            ),
            MinimizeError::BudgetExhausted { explored } => write!(
                f,
                "Search budget exhausted after exploring {} nodes without \
                 proving a minimum cover",
                explored
            ),
        }
    }
}

impl std::error::Error for MinimizeError {}

// Conversion to io::Error for callers that funnel everything through IO
// results, matching the error plumbing of PLA-style tools.
impl From<MinimizeError> for io::Error {
    fn from(err: MinimizeError) -> Self {
        match err {
            MinimizeError::BudgetExhausted { .. } => {
                io::Error::new(io::ErrorKind::TimedOut, err)
            }
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}
