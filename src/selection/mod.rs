pub mod budgeting;
pub mod ranking;
pub mod tally;

use crate::catalog::Item;
use crate::types::program::{Program, ProgramMetadata, RankedItem, SelectionError};
pub use budgeting::{apply_budget, BudgetResult};
pub use ranking::{fold_title, Ranker, VoteRanker};
pub use tally::{apply_tally, tally_votes};

/// A budget must be a positive number of minutes.
pub fn validate_budget(budget_minutes: i64) -> Result<u64, SelectionError> {
	u64::try_from(budget_minutes)
		.ok()
		.filter(|b| *b > 0)
		.ok_or(SelectionError::InvalidBudget(budget_minutes))
}

pub struct ProgramSelector<R> {
	ranker: R,
}

impl Default for ProgramSelector<VoteRanker> {
	fn default() -> Self {
		Self { ranker: VoteRanker }
	}
}

impl<R> ProgramSelector<R>
where
	R: Ranker,
{
	pub fn new(ranker: R) -> Self {
		Self { ranker }
	}

	/// Rank `items` and greedily fill `budget_minutes`.
	///
	/// Vote counts are taken as given; run [`apply_tally`] first when they
	/// must reflect a ballot set.
	pub fn select(&self, items: &[Item], budget_minutes: i64) -> Result<Program, SelectionError> {
		// 0. Reject the budget before touching the items
		let budget = validate_budget(budget_minutes)?;

		// 1. Ordering Phase
		let mut ordered: Vec<&Item> = items.iter().collect();
		ordered.sort_by(|a, b| self.ranker.compare(a, b));

		debug_assert!(ordered
			.windows(2)
			.all(|w| self.ranker.compare(w[0], w[1]) != std::cmp::Ordering::Greater));

		let ranked: Vec<RankedItem<'_>> = ordered
			.into_iter()
			.enumerate()
			.map(|(idx, item)| RankedItem { item, rank: idx + 1 })
			.collect();

		// 2. Budgeting Phase
		let BudgetResult {
			entries,
			minutes_used,
			items_selected,
			items_excluded_by_budget,
		} = apply_budget(ranked, budget);

		debug_assert!(minutes_used <= budget);
		log::debug!(
			"selection: {items_selected}/{} item(s), {minutes_used}/{budget} min",
			items.len()
		);

		Ok(Program {
			entries,
			budget_minutes: budget,
			total_minutes: minutes_used,
			metadata: ProgramMetadata {
				items_considered: items.len(),
				items_selected,
				items_excluded_by_budget,
			},
		})
	}
}
