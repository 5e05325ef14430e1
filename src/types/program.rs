use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::types::identifiers::ItemId;

/// One slot of the final program.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramEntry {
    /// 1-based position in ranking order.
    pub position: usize,
    pub id: ItemId,
    pub title: String,
    pub performer: String,
    pub votes: usize,
    pub duration_minutes: u32,
    /// Running total including this entry.
    pub cumulative_minutes: u64,
}

/// Counters describing how the program was assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramMetadata {
    pub items_considered: usize,
    pub items_selected: usize,
    pub items_excluded_by_budget: usize,
}

/// The outcome of a selection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub entries: Vec<ProgramEntry>,
    pub budget_minutes: u64,
    pub total_minutes: u64,
    pub metadata: ProgramMetadata,
}

impl Program {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.entries.iter().map(|e| e.id).collect()
    }
}

/// An item placed in ranking order, as fed to
/// [`apply_budget`](crate::selection::apply_budget). `rank` is 1-based.
/// Borrows the input item so titles are only cloned for selected entries.
#[derive(Debug, Clone)]
pub struct RankedItem<'a> {
    pub item: &'a Item,
    pub rank: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid budget: {0} minutes (must be positive)")]
    InvalidBudget(i64),
}
