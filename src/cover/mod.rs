//! Covering solver: essential-implicant extraction and minimum set cover
//!
//! Given the required minterms and the generated prime implicants, this
//! module identifies the essential implicants (sole coverers of some
//! minterm), then solves the residual minimum-set-cover problem exactly via
//! branch-and-bound or approximately via the greedy heuristic, depending on
//! problem size.

mod branch_bound;

use std::collections::BTreeSet;

use log::debug;

use crate::error::MinimizeError;
use crate::implicant::Implicant;
use crate::rowset::RowSet;
use crate::{CoverStrategy, MinimizeConfig};

/// Outcome of the covering phase, as indices into the prime-implicant list.
///
/// `selected` always contains `essential` as a prefix; `exact` is true when
/// the selection is provably minimum (essentials alone sufficed, or the
/// branch-and-bound search ran to completion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CoverSolution {
    pub(crate) essential: Vec<usize>,
    pub(crate) selected: Vec<usize>,
    pub(crate) exact: bool,
}

/// A non-essential prime still useful for the residual cover.
pub(crate) struct Candidate {
    /// Index into the prime-implicant list.
    prime: usize,
    /// Required minterms this prime covers that essentials did not.
    covers: RowSet,
}

/// Select a cover of `minterms` from `primes`.
///
/// Returns an error only when the exact search exhausts its node budget;
/// validity of the inputs is the caller's responsibility. Every minterm is
/// coverable by construction (its singleton level-0 term survives into some
/// prime), so an unreachable minterm would indicate a generator bug, not a
/// solver failure.
pub(crate) fn solve(
    num_vars: usize,
    minterms: &[usize],
    primes: &[Implicant],
    config: &MinimizeConfig,
) -> Result<CoverSolution, MinimizeError> {
    if minterms.is_empty() {
        return Ok(CoverSolution {
            essential: Vec::new(),
            selected: Vec::new(),
            exact: true,
        });
    }

    // A minterm with exactly one coverer forces that prime into the cover.
    let mut essential_set: BTreeSet<usize> = BTreeSet::new();
    for &minterm in minterms {
        let mut coverers = primes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.covers(minterm))
            .map(|(i, _)| i);
        if let (Some(only), None) = (coverers.next(), coverers.next()) {
            essential_set.insert(only);
        }
    }
    let essential: Vec<usize> = essential_set.into_iter().collect();
    debug!(
        "{} essential prime implicants among {}",
        essential.len(),
        primes.len()
    );

    let capacity = 1usize << num_vars;
    let mut uncovered = RowSet::new(capacity);
    for &minterm in minterms {
        uncovered.insert(minterm);
    }
    for &idx in &essential {
        uncovered.subtract(primes[idx].covered());
    }
    if uncovered.is_empty() {
        return Ok(CoverSolution {
            selected: essential.clone(),
            essential,
            exact: true,
        });
    }

    // Residual candidates: non-essential primes that still help, sorted by
    // descending coverage. The sort is stable, so ties keep discovery order.
    let mut candidates: Vec<Candidate> = primes
        .iter()
        .enumerate()
        .filter(|(i, _)| essential.binary_search(i).is_err())
        .filter_map(|(i, p)| {
            let mut covers = p.covered().clone();
            covers.intersect_with(&uncovered);
            if covers.is_empty() {
                None
            } else {
                Some(Candidate { prime: i, covers })
            }
        })
        .collect();
    candidates.sort_by(|a, b| b.covers.len().cmp(&a.covers.len()));

    let use_greedy = match config.strategy {
        CoverStrategy::Greedy => true,
        CoverStrategy::Exact => false,
        CoverStrategy::Auto => {
            candidates.len() > config.exact_candidate_limit
                || uncovered.len() > config.exact_minterm_limit
        }
    };

    let (residual, exact) = if use_greedy {
        debug!(
            "greedy covering: {} candidates, {} uncovered minterms",
            candidates.len(),
            uncovered.len()
        );
        (greedy_cover(candidates, uncovered), false)
    } else {
        debug!(
            "exact covering: {} candidates, {} uncovered minterms",
            candidates.len(),
            uncovered.len()
        );
        let picks = branch_bound::search(&candidates, &uncovered, config.node_budget)?;
        (picks, true)
    };

    let mut selected = essential.clone();
    selected.extend(residual);
    Ok(CoverSolution {
        essential,
        selected,
        exact,
    })
}

/// Repeatedly pick the candidate covering the most still-uncovered minterms.
///
/// The scan keeps the first strict maximum, so ties break toward the
/// earlier (pre-sorted) candidate and the outcome is deterministic.
fn greedy_cover(mut candidates: Vec<Candidate>, mut uncovered: RowSet) -> Vec<usize> {
    let mut picks = Vec::new();
    while !uncovered.is_empty() && !candidates.is_empty() {
        let mut best = 0;
        let mut best_gain = candidates[0].covers.intersection_len(&uncovered);
        for (i, candidate) in candidates.iter().enumerate().skip(1) {
            let gain = candidate.covers.intersection_len(&uncovered);
            if gain > best_gain {
                best = i;
                best_gain = gain;
            }
        }
        if best_gain == 0 {
            break;
        }
        let candidate = candidates.remove(best);
        uncovered.subtract(&candidate.covers);
        picks.push(candidate.prime);
    }
    picks
}
