use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::ItemId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item {0} must have a positive duration")]
    NonPositiveDuration(ItemId),
    #[error("Item {0} must have a non-empty title")]
    EmptyTitle(ItemId),
}

/// A candidate piece for the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub performer: String,
    pub duration_minutes: u32,
    /// Derived from ballots. Only the tally writes this field.
    pub votes: usize,
}

impl Item {
    /// Build an item with zero votes.
    ///
    /// Rejects items that could never be scheduled or reported:
    /// a zero duration or a blank title.
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        performer: impl Into<String>,
        duration_minutes: u32,
    ) -> Result<Self, ItemError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ItemError::EmptyTitle(id));
        }
        if duration_minutes == 0 {
            return Err(ItemError::NonPositiveDuration(id));
        }

        Ok(Item {
            id,
            title,
            performer: performer.into(),
            duration_minutes,
            votes: 0,
        })
    }

    pub fn with_votes(mut self, votes: usize) -> Self {
        self.votes = votes;
        self
    }
}
