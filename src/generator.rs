//! Prime-implicant generation
//!
//! Builds implicants bottom-up from the combined minterm/don't-care row set
//! by repeated bitwise merging. Two terms merge when their masks agree and
//! their values differ in exactly one bit; the merged term clears the
//! differing bit and marks it in the mask. Terms that survive a round
//! without merging are maximal and emitted as prime implicants.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::implicant::Implicant;

/// Generate the complete, deduplicated prime-implicant list for `rows`
/// (minterms plus don't-cares) over `num_vars` variables.
///
/// Output order is deterministic: primes are emitted round by round, lower
/// popcount group first, in the order terms were created. Each `(value,
/// mask)` signature appears exactly once, with `covered` holding the union
/// of rows reached over every merge path.
pub(crate) fn prime_implicants(num_vars: usize, rows: &[usize]) -> Vec<Implicant> {
    if rows.is_empty() {
        return Vec::new();
    }
    let capacity = 1usize << num_vars;

    // Level 0: one term per row, grouped by popcount of the value. Only
    // adjacent groups can merge, since flipping one value bit changes the
    // popcount by exactly one.
    let mut groups: Vec<Vec<Implicant>> = vec![Vec::new(); num_vars + 1];
    for &row in rows {
        groups[(row as u32).count_ones() as usize].push(Implicant::from_row(row, capacity));
    }
    debug!(
        "level 0: {} terms across {} popcount groups",
        rows.len(),
        groups.iter().filter(|g| !g.is_empty()).count()
    );

    let mut primes: Vec<Implicant> = Vec::new();
    let mut emitted: HashSet<(u32, u32)> = HashSet::new();
    let mut round = 0usize;

    loop {
        round += 1;
        let mut merged: Vec<Implicant> = Vec::new();
        let mut merged_index: HashMap<(u32, u32), usize> = HashMap::new();
        let mut used: Vec<Vec<bool>> = groups.iter().map(|g| vec![false; g.len()]).collect();

        for k in 0..num_vars {
            for i in 0..groups[k].len() {
                for j in 0..groups[k + 1].len() {
                    let a = &groups[k][i];
                    let b = &groups[k + 1][j];
                    if a.mask() != b.mask() {
                        continue;
                    }
                    let diff = a.value() ^ b.value();
                    if !diff.is_power_of_two() {
                        continue;
                    }
                    used[k][i] = true;
                    used[k + 1][j] = true;

                    let value = a.value() & b.value();
                    let mask = a.mask() | diff;
                    match merged_index.entry((value, mask)) {
                        Entry::Occupied(entry) => {
                            // Same signature reached via another merge path:
                            // fold both covered sets in, idempotently.
                            let idx = *entry.get();
                            merged[idx].covered.union_with(a.covered());
                            merged[idx].covered.union_with(b.covered());
                        }
                        Entry::Vacant(entry) => {
                            let mut covered = a.covered().clone();
                            covered.union_with(b.covered());
                            entry.insert(merged.len());
                            merged.push(Implicant::new(value, mask, covered));
                        }
                    }
                }
            }
        }

        // Terms not consumed by any merge are maximal.
        for (k, group) in groups.iter().enumerate() {
            for (i, term) in group.iter().enumerate() {
                if !used[k][i] && emitted.insert(term.signature()) {
                    primes.push(term.clone());
                }
            }
        }

        if merged.is_empty() {
            break;
        }
        trace!("round {}: {} merged terms", round, merged.len());

        // Regroup survivors. The masked positions of a value are normalized
        // to zero, so popcount(value) already ignores them.
        let mut next: Vec<Vec<Implicant>> = vec![Vec::new(); num_vars + 1];
        for term in merged {
            next[term.value().count_ones() as usize].push(term);
        }
        groups = next;
    }

    debug!(
        "{} prime implicants after {} merge rounds",
        primes.len(),
        round
    );
    primes
}
