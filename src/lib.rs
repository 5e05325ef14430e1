//! Deterministic concert program selection and PDF report writer.
//!
//! `setlist-core` recomputes vote counts from ballots, ranks items by votes
//! (ties broken by case-folded title), greedily fills a duration budget, and
//! renders the resulting program as a minimal single-page PDF. All operations
//! are deterministic: identical inputs always produce identical outputs,
//! byte-for-byte. Nothing is cached between calls.

pub mod catalog;
pub mod config;
pub mod export;
pub mod report;
pub mod selection;
pub mod types;
