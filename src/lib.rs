#![warn(missing_docs)]

//! Tier-ranked filtering and sorting for typeahead-style queries.
//!
//! `tiersort` ranks the items of an in-memory collection against a query
//! string using a 7-tier classification system, drops the non-matches, and
//! returns the rest ordered best match first. Items can be plain strings or
//! structured records ranked through caller-supplied field selectors.

/// Rank tiers and the classification procedure for string matching.
pub mod ranking;

/// Field selectors for extracting matchable string values from items.
pub mod key;

/// No-keys mode for ranking string-like items directly.
pub mod no_keys;

/// Configuration for the tier-sorting pipeline.
pub mod options;

/// Candidate records, the order policy, and the top-level pipeline.
pub mod sort;

// Re-export the public API at the crate root.
pub use key::{BestRank, Key, best_rank};
pub use no_keys::{AsCandidateStr, rank_item};
pub use options::TierSortOptions;
pub use ranking::{RankTier, acronym_of, classify, contains_in_order, fold_diacritics};
pub use sort::{RankedItem, compare_ranked, tier_sort};
