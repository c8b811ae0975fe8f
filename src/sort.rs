//! Candidate records, the strict order policy, and the top-level pipeline.
//!
//! The comparator orders matched candidates by rank tier (descending), then
//! winning selector (earlier keys first), then original input position. It
//! never reports two distinct records as equal, so the final order is fully
//! deterministic regardless of the sort algorithm's own stability.

use std::cmp::Ordering;

use crate::key::best_rank_prepared;
use crate::no_keys::AsCandidateStr;
use crate::options::TierSortOptions;
use crate::ranking::{PreparedQuery, RankTier, classify_prepared};

/// A matched candidate, transient between classification and the final sort.
///
/// Holds a shared reference into the caller's collection together with the
/// ranking metadata the order policy sorts on. Records are created fresh per
/// [`tier_sort`] call and discarded after sorting.
#[derive(Debug)]
pub struct RankedItem<'a, T> {
    /// The original item, borrowed from the caller's collection.
    pub item: &'a T,

    /// Position of the item in the input collection, used as the final
    /// tie-break so equally-ranked items keep their original relative order.
    pub index: usize,

    /// Best rank tier achieved across the item's selectors.
    pub tier: RankTier,

    /// Position of the selector that achieved the best tier, or `None` in
    /// no-keys mode.
    pub key_index: Option<usize>,
}

/// Order winning selectors: earlier-declared keys first, no-selector last.
///
/// `Option`'s derived ordering puts `None` first, which is the wrong way
/// around here: a match found via any declared selector outranks one found
/// with no selector at all.
fn compare_key_index(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Three-level strict comparator for ranked candidates.
///
/// 1. **Higher tier first** — a better match sorts earlier.
/// 2. **Earlier selector first** — when tiers are equal, the item matched
///    via an earlier-declared key comes first; a no-selector match sorts
///    after any keyed match.
/// 3. **Original position** — when both are equal, input order is preserved.
///
/// Distinct records always have distinct input positions, so this never
/// returns [`Ordering::Equal`] for them; every pair has a deterministic
/// resolved order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use tiersort::{RankTier, RankedItem, compare_ranked};
///
/// let (x, y) = ("apple", "grape");
/// let a = RankedItem { item: &x, index: 0, tier: RankTier::StartsWith, key_index: None };
/// let b = RankedItem { item: &y, index: 1, tier: RankTier::Contains, key_index: None };
///
/// // StartsWith beats Contains, so `a` comes first.
/// assert_eq!(compare_ranked(&a, &b), Ordering::Less);
/// ```
pub fn compare_ranked<T>(a: &RankedItem<'_, T>, b: &RankedItem<'_, T>) -> Ordering {
    // Tier descending, hence b-vs-a.
    b.tier
        .cmp(&a.tier)
        .then_with(|| compare_key_index(a.key_index, b.key_index))
        .then_with(|| a.index.cmp(&b.index))
}

/// Rank a collection against a query and return the matches, best first.
///
/// Each item is classified (via the configured keys, or as its own text when
/// `options.keys` is empty), items below their effective threshold — a key's
/// [`threshold`](crate::Key::threshold) override, otherwise
/// [`options.threshold`](TierSortOptions::threshold) — are dropped along
/// with every non-match, and the survivors are ordered by [`compare_ranked`].
/// The input collection is never mutated; the result borrows the original
/// items in sorted order.
///
/// # Examples
///
/// ```
/// use tiersort::{TierSortOptions, tier_sort};
///
/// let items = ["apple", "banana", "grape"];
/// let results = tier_sort(&items, "ap", &TierSortOptions::default());
///
/// // "apple" starts with the query; "grape" merely contains it.
/// assert_eq!(results, vec![&"apple", &"grape"]);
/// ```
///
/// Structured records rank through keys; the item type still implements
/// [`AsCandidateStr`] so the same entry point covers both modes:
///
/// ```
/// use tiersort::{AsCandidateStr, Key, TierSortOptions, tier_sort};
///
/// struct City { name: String }
///
/// impl AsCandidateStr for City {
///     fn as_candidate_str(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let cities = vec![
///     City { name: "Berlin".to_owned() },
///     City { name: "Bern".to_owned() },
/// ];
/// let opts = TierSortOptions {
///     keys: vec![Key::<City>::from_fn(|c| c.name.as_str())],
///     ..Default::default()
/// };
///
/// let results = tier_sort(&cities, "bern", &opts);
/// assert_eq!(results[0].name, "Bern");
/// ```
pub fn tier_sort<'a, T: AsCandidateStr>(
    items: &'a [T],
    query: &str,
    options: &TierSortOptions<T>,
) -> Vec<&'a T> {
    // Prepare the query and substring searcher once; the lowercase buffer is
    // reused across every candidate.
    let pq = PreparedQuery::new(query, options.strip_diacritics);
    let finder = pq.finder();
    let mut buf = String::new();

    let mut ranked: Vec<RankedItem<'a, T>> = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let (tier, key_index, key_threshold) = if options.keys.is_empty() {
            let tier = classify_prepared(
                item.as_candidate_str(),
                &pq,
                options.strip_diacritics,
                &mut buf,
                finder.as_ref(),
            );
            (tier, None, None)
        } else {
            let best = best_rank_prepared(
                item,
                &options.keys,
                &pq,
                options.strip_diacritics,
                &mut buf,
                finder.as_ref(),
            );
            (best.tier, best.key_index, best.key_threshold)
        };

        let threshold = key_threshold.unwrap_or(options.threshold);
        if tier == RankTier::NoMatch || tier < threshold {
            continue;
        }

        ranked.push(RankedItem {
            item,
            index,
            tier,
            key_index,
        });
    }

    ranked.sort_by(|a, b| compare_ranked(a, b));
    ranked.into_iter().map(|r| r.item).collect()
}
