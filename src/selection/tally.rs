use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Ballot, Item};
use crate::types::identifiers::ItemId;

/// Count distinct ballots per item.
///
/// Every item appears in the result, with 0 when nobody voted for it.
/// Ballots for ids not present in `items` are dropped.
pub fn tally_votes(items: &[Item], ballots: &[Ballot]) -> BTreeMap<ItemId, usize> {
    let mut counts: BTreeMap<ItemId, usize> = items.iter().map(|item| (item.id, 0)).collect();

    let distinct: BTreeSet<&Ballot> = ballots.iter().collect();
    let mut orphaned = 0usize;

    for ballot in distinct {
        match counts.get_mut(&ballot.item) {
            Some(count) => *count += 1,
            None => orphaned += 1,
        }
    }

    if orphaned > 0 {
        log::debug!("tally: ignored {orphaned} ballot(s) for unknown items");
    }

    counts
}

/// Return copies of `items` with `votes` recomputed from `ballots`.
///
/// Existing vote values on the input are ignored, never added to.
pub fn apply_tally(items: &[Item], ballots: &[Ballot]) -> Vec<Item> {
    let counts = tally_votes(items, ballots);

    items
        .iter()
        .map(|item| {
            let mut tallied = item.clone();
            tallied.votes = counts.get(&item.id).copied().unwrap_or(0);
            tallied
        })
        .collect()
}
