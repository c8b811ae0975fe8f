//! Field selectors and best-rank evaluation across an ordered selector list.
//!
//! A [`Key<T>`] describes how to extract one or more string values from an
//! item of type `T` for ranking. Selector order is significant: it is fixed
//! by the caller and encodes priority, which the order policy uses as a
//! tie-break between items that match at the same tier.
//!
//! [`BestRank`] captures the result of evaluating a single item against a
//! query across all of its keys.

use crate::options::TierSortOptions;
use crate::ranking::{PreparedQuery, RankTier, classify_prepared};

/// Type alias for the boxed extractor closure stored inside a [`Key`].
///
/// Given a reference to an item of type `T`, the extractor returns a
/// `Vec<String>` of values to rank against the query.
type Extractor<T> = Box<dyn Fn(&T) -> Vec<String>>;

/// A single field selector for extracting matchable string values from an
/// item.
///
/// Keys are constructed via [`Key::new`], [`Key::from_fn`], or
/// [`Key::from_opt_fn`], then optionally refined with builder methods
/// (`.threshold()`, `.min_ranking()`, `.max_ranking()`).
///
/// # Examples
///
/// ```
/// use tiersort::{Key, RankTier};
///
/// struct User { name: String, nickname: Option<String> }
///
/// // Single borrowed field
/// let key = Key::<User>::from_fn(|u| u.name.as_str());
///
/// // Optional field; absence ranks as empty text, never an error
/// let key = Key::<User>::from_opt_fn(|u| u.nickname.as_deref());
///
/// // Caller-supplied resolver with per-key rank attributes
/// let key = Key::new(|u: &User| vec![u.name.clone()])
///     .threshold(RankTier::StartsWith)
///     .max_ranking(RankTier::Contains);
/// ```
pub struct Key<T> {
    /// Closure that extracts one or more string values from an item.
    /// Returns a `Vec<String>` to support multi-valued fields (e.g., tags).
    extractor: Extractor<T>,

    /// Per-key threshold override. When `Some`, matches won by this key must
    /// meet this tier to be included. When `None`, the global threshold
    /// applies.
    pub(crate) threshold: Option<RankTier>,

    /// Maximum tier this key can contribute. Clamps the tier down so that a
    /// match on this key never exceeds it.
    ///
    /// Defaults to [`RankTier::Equals`] (no clamping).
    pub(crate) max_ranking: RankTier,

    /// Minimum tier this key can contribute. Promotes non-`NoMatch` results
    /// up to this tier (but never promotes `NoMatch` itself).
    ///
    /// Defaults to [`RankTier::NoMatch`] (no boosting).
    pub(crate) min_ranking: RankTier,
}

impl<T> Key<T> {
    /// Create a key from a closure that returns zero or more owned strings.
    ///
    /// This is the most general constructor; use it for multi-valued fields
    /// such as tag lists. For single-field extraction, [`Key::from_fn`] and
    /// [`Key::from_opt_fn`] are more convenient.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiersort::Key;
    ///
    /// struct Article { tags: Vec<String> }
    ///
    /// let key = Key::new(|a: &Article| a.tags.clone());
    /// ```
    pub fn new<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> Vec<String> + 'static,
    {
        Self {
            extractor: Box::new(extractor),
            threshold: None,
            min_ranking: RankTier::NoMatch,
            max_ranking: RankTier::Equals,
        }
    }

    /// Create a key from a closure that returns a single borrowed `&str`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiersort::Key;
    ///
    /// struct User { name: String }
    ///
    /// let key = Key::<User>::from_fn(|u| u.name.as_str());
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> &str + 'static,
    {
        Self::new(move |item| vec![f(item).to_owned()])
    }

    /// Create a key from a closure that returns an optional borrowed `&str`.
    ///
    /// An absent field (`None`) resolves to empty text for classification
    /// purposes: it never raises an error and ranks as `NoMatch` against any
    /// non-empty query.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiersort::Key;
    ///
    /// struct User { nickname: Option<String> }
    ///
    /// let key = Key::<User>::from_opt_fn(|u| u.nickname.as_deref());
    /// ```
    pub fn from_opt_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> Option<&str> + 'static,
    {
        Self::new(move |item| vec![f(item).unwrap_or_default().to_owned()])
    }

    /// Set a per-key threshold override.
    ///
    /// When set, matches won by this key must meet or exceed the given tier
    /// to appear in the output, overriding the global
    /// [`threshold`](TierSortOptions::threshold).
    #[must_use]
    pub fn threshold(mut self, tier: RankTier) -> Self {
        self.threshold = Some(tier);
        self
    }

    /// Set the maximum tier this key can contribute.
    ///
    /// The tier produced by this key is clamped down to at most this value.
    /// For example, a `max_ranking` of [`RankTier::Contains`] means this key
    /// can never produce `StartsWith` or `Equals`.
    ///
    /// Defaults to [`RankTier::Equals`] (no clamping).
    #[must_use]
    pub fn max_ranking(mut self, tier: RankTier) -> Self {
        self.max_ranking = tier;
        self
    }

    /// Set the minimum tier this key can contribute.
    ///
    /// Non-`NoMatch` results are promoted up to at least this tier. A
    /// `NoMatch` result is never promoted: an item that does not match at
    /// all stays unmatched regardless of this setting.
    ///
    /// Defaults to [`RankTier::NoMatch`] (no boosting).
    #[must_use]
    pub fn min_ranking(mut self, tier: RankTier) -> Self {
        self.min_ranking = tier;
        self
    }

    /// Extract string values from an item using this key's extractor.
    ///
    /// An empty vector means the item produces no match candidates for this
    /// key.
    pub fn extract(&self, item: &T) -> Vec<String> {
        (self.extractor)(item)
    }

    /// Returns the per-key threshold override, if set.
    pub fn threshold_value(&self) -> Option<RankTier> {
        self.threshold
    }

    /// Returns the maximum tier this key can contribute.
    pub fn max_ranking_value(&self) -> RankTier {
        self.max_ranking
    }

    /// Returns the minimum tier this key can contribute.
    pub fn min_ranking_value(&self) -> RankTier {
        self.min_ranking
    }
}

/// The result of ranking a single item against a query across all keys.
///
/// Captures the best tier achieved, which selector achieved it, and the
/// winning key's threshold override (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestRank {
    /// The best tier achieved across all keys.
    pub tier: RankTier,

    /// Position in the caller's key list of the selector that achieved the
    /// best tier, or `None` when no key matched (or no keys exist). When
    /// several selectors tie at the best tier, the earliest one wins.
    pub key_index: Option<usize>,

    /// Threshold override from the winning key, or `None` if the key uses
    /// the global threshold.
    pub key_threshold: Option<RankTier>,
}

impl BestRank {
    /// The initial state before any selector has been evaluated.
    fn no_match() -> Self {
        Self {
            tier: RankTier::NoMatch,
            key_index: None,
            key_threshold: None,
        }
    }
}

/// Inner hot-path evaluation using pre-prepared query data.
///
/// Iterates `keys` in order; a value's tier replaces the running best only
/// when strictly greater, so among selectors that tie at the best tier the
/// earliest keeps the win.
pub(crate) fn best_rank_prepared<T>(
    item: &T,
    keys: &[Key<T>],
    pq: &PreparedQuery,
    strip_diacritics: bool,
    candidate_buf: &mut String,
    finder: Option<&memchr::memmem::Finder<'_>>,
) -> BestRank {
    let mut best = BestRank::no_match();

    for (key_index, key) in keys.iter().enumerate() {
        for value in key.extract(item) {
            let mut tier =
                classify_prepared(&value, pq, strip_diacritics, candidate_buf, finder);

            // Clamp down: a tier above the key's max_ranking is capped.
            if tier > key.max_ranking {
                tier = key.max_ranking;
            }

            // Promote up: a tier below the key's min_ranking is boosted,
            // except NoMatch — an item that doesn't match stays unmatched.
            if tier < key.min_ranking && tier != RankTier::NoMatch {
                tier = key.min_ranking;
            }

            // Strictly-greater update: iteration order makes the first
            // occurrence at a given tier the lowest key index, so ties never
            // overwrite.
            if tier > best.tier {
                best = BestRank {
                    tier,
                    key_index: Some(key_index),
                    key_threshold: key.threshold,
                };
            }
        }
    }

    best
}

/// Evaluate all keys for a single item and return the best rank achieved.
///
/// Iterates the caller's keys in order, classifies every extracted value
/// against `query`, and keeps the strictly best tier; when two selectors tie
/// at the best tier, the earlier-declared one is recorded. With no keys (or
/// no values), the result is [`RankTier::NoMatch`] with no key index.
///
/// # Examples
///
/// ```
/// use tiersort::{BestRank, Key, RankTier, TierSortOptions, best_rank};
///
/// struct User { name: String, email: String }
///
/// let user = User {
///     name: "Alice".to_owned(),
///     email: "alice@example.com".to_owned(),
/// };
/// let opts = TierSortOptions {
///     keys: vec![
///         Key::<User>::from_fn(|u| u.name.as_str()),
///         Key::<User>::from_fn(|u| u.email.as_str()),
///     ],
///     ..Default::default()
/// };
///
/// let best = best_rank(&user, &opts.keys, "alice", &opts);
/// assert_eq!(best.tier, RankTier::Equals);
/// assert_eq!(best.key_index, Some(0));
/// ```
pub fn best_rank<T>(
    item: &T,
    keys: &[Key<T>],
    query: &str,
    options: &TierSortOptions<T>,
) -> BestRank {
    // Thin wrapper: construct a PreparedQuery for one-off calls.
    let pq = PreparedQuery::new(query, options.strip_diacritics);
    let finder = pq.finder();
    let mut buf = String::new();
    best_rank_prepared(
        item,
        keys,
        &pq,
        options.strip_diacritics,
        &mut buf,
        finder.as_ref(),
    )
}
