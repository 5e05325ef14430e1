use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ItemId, VoterId};

/// One vote: `voter` backs `item`.
///
/// Ballots compare by value, so a repeated `(voter, item)` pair is the
/// same ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ballot {
    pub voter: VoterId,
    pub item: ItemId,
}

impl Ballot {
    pub fn new(voter: VoterId, item: ItemId) -> Self {
        Ballot { voter, item }
    }
}
