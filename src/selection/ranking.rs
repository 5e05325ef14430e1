use std::cmp::Ordering;

use crate::catalog::Item;

pub trait Ranker {
    /// Total order over items; `Ordering::Less` means `a` ranks higher.
    fn compare(&self, a: &Item, b: &Item) -> Ordering;
}

/// v0: votes descending, then case-folded title ascending.
///
/// Remaining ties fall back to the raw title and then the item id so the
/// order never depends on input position.
#[derive(Debug, Default, Clone, Copy)]
pub struct VoteRanker;

impl Ranker for VoteRanker {
    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        b.votes
            .cmp(&a.votes)
            .then_with(|| fold_title(&a.title).cmp(&fold_title(&b.title)))
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Case folding used for the title tie-break. Compared by code point afterwards.
pub fn fold_title(title: &str) -> String {
    title.to_lowercase()
}
