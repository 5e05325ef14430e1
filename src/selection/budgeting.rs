use crate::types::program::{ProgramEntry, RankedItem};

pub struct BudgetResult {
    pub entries: Vec<ProgramEntry>,
    pub minutes_used: u64,
    pub items_selected: usize,
    pub items_excluded_by_budget: usize,
}

/// Single greedy pass in rank order.
///
/// An item is taken iff it still fits; a skipped item is never revisited,
/// but later shorter items remain eligible.
pub fn apply_budget(ranked: Vec<RankedItem<'_>>, budget: u64) -> BudgetResult {
    let mut entries = Vec::new();
    let mut minutes_used: u64 = 0;
    let mut items_excluded_by_budget = 0;

    for ranked_item in ranked {
        let item = ranked_item.item;
        let duration = u64::from(item.duration_minutes);

        if minutes_used + duration <= budget {
            minutes_used += duration;
            entries.push(ProgramEntry {
                position: entries.len() + 1,
                id: item.id,
                title: item.title.clone(),
                performer: item.performer.clone(),
                votes: item.votes,
                duration_minutes: item.duration_minutes,
                cumulative_minutes: minutes_used,
            });
        } else {
            log::debug!(
                "budget: skipped rank {} (item {}, {} min) at {}/{} min",
                ranked_item.rank,
                item.id,
                duration,
                minutes_used,
                budget
            );
            items_excluded_by_budget += 1;
        }
    }

    BudgetResult {
        items_selected: entries.len(),
        entries,
        minutes_used,
        items_excluded_by_budget,
    }
}
