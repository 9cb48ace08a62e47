//! Exact minimum-cover search
//!
//! Depth-first include/exclude search over the sorted candidate list. The
//! best-known solution is threaded through an explicit [`Search`] context so
//! the search stays reentrant; there is no hidden global state.

use log::debug;

use super::Candidate;
use crate::error::MinimizeError;
use crate::rowset::RowSet;

/// Find a minimum-size subset of `candidates` covering `uncovered`.
///
/// Returns the picked primes (as indices into the prime-implicant list) in
/// candidate order. Fails with [`MinimizeError::BudgetExhausted`] if
/// `node_budget` nodes are explored before the search completes; a cover
/// found but not yet proven minimum is discarded rather than returned.
pub(super) fn search(
    candidates: &[Candidate],
    uncovered: &RowSet,
    node_budget: Option<u64>,
) -> Result<Vec<usize>, MinimizeError> {
    let mut ctx = Search {
        candidates,
        node_budget,
        nodes: 0,
        best: None,
        out_of_budget: false,
    };
    let mut chosen = Vec::new();
    ctx.explore(&mut chosen, uncovered, 0);

    if ctx.out_of_budget {
        return Err(MinimizeError::BudgetExhausted { explored: ctx.nodes });
    }
    debug!("branch-and-bound explored {} nodes", ctx.nodes);

    // Every residual minterm has at least one candidate coverer, so the
    // all-include branch always yields a cover.
    let best = ctx
        .best
        .expect("prime implicants must cover every required minterm");
    Ok(best.iter().map(|&i| ctx.candidates[i].prime).collect())
}

struct Search<'a> {
    candidates: &'a [Candidate],
    node_budget: Option<u64>,
    nodes: u64,
    /// Indices into `candidates` forming the smallest cover found so far.
    best: Option<Vec<usize>>,
    out_of_budget: bool,
}

impl Search<'_> {
    fn explore(&mut self, chosen: &mut Vec<usize>, uncovered: &RowSet, index: usize) {
        if self.out_of_budget {
            return;
        }
        self.nodes += 1;
        if let Some(budget) = self.node_budget {
            if self.nodes > budget {
                self.out_of_budget = true;
                return;
            }
        }

        // A selection as large as the best is never an improvement; only
        // strictly smaller covers replace it.
        if let Some(best) = &self.best {
            if chosen.len() >= best.len() {
                return;
            }
        }
        if uncovered.is_empty() {
            self.best = Some(chosen.clone());
            return;
        }
        if index >= self.candidates.len() {
            return;
        }

        let max_coverage = self.candidates[index..]
            .iter()
            .map(|c| c.covers.intersection_len(uncovered))
            .max()
            .unwrap_or(0);
        if max_coverage == 0 {
            return;
        }
        // Even the most useful remaining candidate needs this many picks.
        let lower_bound = chosen.len() + uncovered.len().div_ceil(max_coverage);
        if let Some(best) = &self.best {
            if lower_bound >= best.len() {
                return;
            }
        }

        // Include first: biases toward finding small covers quickly.
        let mut rest = uncovered.clone();
        rest.subtract(&self.candidates[index].covers);
        chosen.push(index);
        self.explore(chosen, &rest, index + 1);
        chosen.pop();

        self.explore(chosen, uncovered, index + 1);
    }
}
