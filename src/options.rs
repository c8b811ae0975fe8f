//! Configuration for the tier-sorting pipeline.

use crate::key::Key;
use crate::ranking::RankTier;

/// Options controlling how [`tier_sort`](crate::tier_sort) ranks and filters
/// a collection.
///
/// With no keys configured, items are ranked as their own text (via
/// [`AsCandidateStr`](crate::AsCandidateStr)). Key order is significant: an
/// earlier key outranks a later one when two items match at the same tier.
///
/// # Examples
///
/// ```
/// use tiersort::{RankTier, TierSortOptions};
///
/// // Defaults: no keys, include everything above NoMatch, lowercase-only
/// // comparison.
/// let opts: TierSortOptions<&str> = TierSortOptions::default();
/// assert_eq!(opts.threshold, RankTier::InOrderSubsequence);
/// assert!(!opts.strip_diacritics);
///
/// // Require at least a substring match.
/// let opts = TierSortOptions::<&str> {
///     threshold: RankTier::Contains,
///     ..Default::default()
/// };
/// assert_eq!(opts.threshold, RankTier::Contains);
/// ```
pub struct TierSortOptions<T> {
    /// Ordered field selectors. Empty (the default) means items are ranked
    /// as their own text.
    pub keys: Vec<Key<T>>,

    /// Minimum tier an item must reach to appear in the output. Defaults to
    /// [`RankTier::InOrderSubsequence`], the lowest passing tier, so every
    /// match survives. A key's [`threshold`](Key::threshold) override takes
    /// precedence for items won by that key.
    pub threshold: RankTier,

    /// When `true`, diacritics are stripped from candidates and query before
    /// comparison, so e.g. "cafe" matches "café". Defaults to `false`:
    /// comparison is lowercase-only.
    pub strip_diacritics: bool,
}

impl<T> Default for TierSortOptions<T> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            threshold: RankTier::InOrderSubsequence,
            strip_diacritics: false,
        }
    }
}
