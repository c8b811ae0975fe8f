//! Rank tiers and the classification procedure for string matching.
//!
//! This module implements the 7-tier classifier that determines how well a
//! candidate string matches a query, from full case-insensitive equality down
//! to an in-order character subsequence, along with the acronym and
//! subsequence helpers the lower tiers are built on.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// How well a candidate string matches a query.
///
/// The tier system has 7 discrete values ordered from best to worst:
///
/// | Tier                 | Value | Description                                   |
/// |----------------------|-------|-----------------------------------------------|
/// | `Equals`             | 5     | Case-insensitive full match                   |
/// | `StartsWith`         | 4     | Candidate starts with the query               |
/// | `WordStartsWith`     | 3     | A space-delimited word starts with the query  |
/// | `Contains`           | 2     | Candidate contains the query as a substring   |
/// | `Acronym`            | 1     | The candidate's acronym contains the query    |
/// | `InOrderSubsequence` | 0     | Query characters appear in order, scattered   |
/// | `NoMatch`            | -1    | No match found (sentinel, never in output)    |
///
/// All comparisons are case-insensitive; both strings are lowercased before
/// any tier is assigned. Exactly one tier applies to a given candidate/query
/// pair.
///
/// # Ordering
///
/// `RankTier` implements [`Ord`] such that better matches compare as
/// greater:
///
/// ```
/// use tiersort::RankTier;
///
/// assert!(RankTier::Equals > RankTier::StartsWith);
/// assert!(RankTier::InOrderSubsequence > RankTier::NoMatch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankTier {
    /// Case-insensitive full match (tier 5).
    Equals,
    /// Candidate starts with the query (tier 4).
    StartsWith,
    /// The query starts a space-delimited word within the candidate (tier 3).
    WordStartsWith,
    /// Candidate contains the query as a substring (tier 2).
    Contains,
    /// The candidate's acronym contains the query as a substring (tier 1).
    Acronym,
    /// Every query character appears in the candidate in order, not
    /// necessarily contiguously (tier 0).
    InOrderSubsequence,
    /// No match found (tier -1).
    NoMatch,
}

impl RankTier {
    /// Returns the integer tier value, 5 down to -1 with `NoMatch` lowest.
    fn tier_value(self) -> i8 {
        match self {
            RankTier::Equals => 5,
            RankTier::StartsWith => 4,
            RankTier::WordStartsWith => 3,
            RankTier::Contains => 2,
            RankTier::Acronym => 1,
            RankTier::InOrderSubsequence => 0,
            RankTier::NoMatch => -1,
        }
    }
}

// Manual `Ord` so that variant declaration order (best first, matching the
// doc table) does not dictate comparison order: higher-quality tiers must
// compare as greater.
impl Ord for RankTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.tier_value().cmp(&other.tier_value())
    }
}

impl PartialOrd for RankTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns whether `c` is an acronym word-boundary delimiter.
///
/// Only space (`' '`) and hyphen (`'-'`) are recognized as delimiters.
fn is_acronym_delimiter(c: char) -> bool {
    c == ' ' || c == '-'
}

/// Extract the acronym from a string by collecting word-initial characters.
///
/// The string is treated as a sequence of sub-words delimited by spaces and
/// hyphens; the acronym is the first character of every non-empty sub-word,
/// concatenated in order. Runs of delimiters and leading/trailing delimiters
/// contribute nothing. The caller is responsible for lowercasing the input
/// before calling.
///
/// # Examples
///
/// ```
/// use tiersort::acronym_of;
///
/// assert_eq!(acronym_of("north-west airlines"), "nwa");
/// assert_eq!(acronym_of("san francisco"), "sf");
/// assert_eq!(acronym_of("single"), "s");
/// assert_eq!(acronym_of(" leading space"), "ls");
/// assert_eq!(acronym_of(""), "");
/// ```
pub fn acronym_of(s: &str) -> String {
    // Estimate capacity: one char per sub-word. memchr gives a fast count of
    // delimiter bytes (space and hyphen are single-byte ASCII).
    let word_count_estimate = 1 + memchr::memchr2_iter(b' ', b'-', s.as_bytes()).count();
    let mut acronym = String::with_capacity(word_count_estimate);

    let mut at_word_start = true;
    for c in s.chars() {
        if is_acronym_delimiter(c) {
            at_word_start = true;
        } else {
            if at_word_start {
                acronym.push(c);
            }
            at_word_start = false;
        }
    }

    acronym
}

/// Test whether every character of `query`, in order, can be found in
/// `candidate` scanning left to right without reusing an earlier position.
///
/// Maintains a single forward cursor into `candidate`: each query character
/// consumes candidate characters up to and including its first occurrence
/// past the cursor. Fails as soon as a query character cannot be found. This
/// is a single O(|`candidate`|) pass with no backtracking, not an
/// edit-distance computation.
///
/// The empty query trivially succeeds. Matching is case-sensitive; the
/// caller is responsible for lowercasing both sides.
///
/// # Examples
///
/// ```
/// use tiersort::contains_in_order;
///
/// assert!(contains_in_order("playground", "plgnd"));
/// assert!(!contains_in_order("playground", "dnglp"));
/// assert!(!contains_in_order("abc", "abcc"));
/// ```
pub fn contains_in_order(candidate: &str, query: &str) -> bool {
    // `.any` advances the iterator past the matched character, which is
    // exactly the "advance the cursor to just past it" scan.
    let mut candidate_chars = candidate.chars();
    for query_char in query.chars() {
        if !candidate_chars.any(|c| c == query_char) {
            return false;
        }
    }
    true
}

/// Optionally strip diacritics from a string before comparison.
///
/// When `strip` is `true`, applies Unicode NFD decomposition and removes
/// combining marks (`General_Category = Mark`), so that e.g. `"café"`
/// becomes `"cafe"`. When `strip` is `false` (the library default), the
/// original string is returned unchanged.
///
/// Returns [`Cow::Borrowed`] whenever no modification is needed — either
/// because stripping is disabled, the string is pure ASCII, or decomposition
/// removes nothing. Only allocates when characters are actually removed.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use tiersort::fold_diacritics;
///
/// let folded = fold_diacritics("caf\u{00E9}", true);
/// assert_eq!(folded, "cafe");
/// assert!(matches!(folded, Cow::Owned(_)));
///
/// let folded = fold_diacritics("caf\u{00E9}", false);
/// assert_eq!(folded, "caf\u{00E9}");
/// assert!(matches!(folded, Cow::Borrowed(_)));
/// ```
pub fn fold_diacritics(s: &str, strip: bool) -> Cow<'_, str> {
    if !strip {
        return Cow::Borrowed(s);
    }

    // Fast path: ASCII strings never contain combining marks.
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    // NFD splits precomposed characters like U+00E9 (e-acute) into their
    // base letter + combining mark, so filtering the marks strips the
    // diacritics.
    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();

    if stripped == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(stripped)
    }
}

/// Pre-computed query data for amortizing repeated per-candidate
/// classification.
///
/// Caches the folded, lowercased query and its character count so that
/// [`tier_sort`](crate::tier_sort) avoids redundant work when classifying
/// thousands of candidates against the same query. Constructed once before
/// the ranking loop and passed by reference to [`classify_prepared`].
pub(crate) struct PreparedQuery {
    /// Lowercased (and optionally diacritics-folded) query.
    pub(crate) lower: String,
    /// Character count of the lowercased query, cached to avoid repeated
    /// `.chars().count()` calls.
    char_count: usize,
}

impl PreparedQuery {
    /// Fold and lowercase the query once.
    pub(crate) fn new(query: &str, strip_diacritics: bool) -> Self {
        let lower = fold_diacritics(query, strip_diacritics).to_lowercase();
        // ASCII fast path: byte length equals character count.
        let char_count = if lower.is_ascii() {
            lower.len()
        } else {
            lower.chars().count()
        };
        Self { lower, char_count }
    }

    /// Build the SIMD substring searcher for this query, or `None` for the
    /// empty query (`memmem` rejects empty needles; [`classify_prepared`]
    /// resolves the empty query without a finder).
    pub(crate) fn finder(&self) -> Option<memchr::memmem::Finder<'_>> {
        if self.lower.is_empty() {
            None
        } else {
            Some(memchr::memmem::Finder::new(self.lower.as_bytes()))
        }
    }
}

/// Lowercase `s` into `buf`, reusing the buffer's allocation.
///
/// When `s` is ASCII, uses a byte-level fast path that avoids Unicode
/// case-mapping tables entirely. For non-ASCII input, falls back to
/// `char::to_lowercase()`.
fn lowercase_into(s: &str, buf: &mut String) {
    buf.clear();
    buf.reserve(s.len());
    if s.is_ascii() {
        // ASCII bytes are single-byte UTF-8, so lowercasing byte-by-byte
        // and casting to char is safe and avoids Unicode lookup tables.
        buf.extend(s.as_bytes().iter().map(|&b| b.to_ascii_lowercase() as char));
    } else {
        for c in s.chars() {
            for lc in c.to_lowercase() {
                buf.push(lc);
            }
        }
    }
}

/// Inner hot-path classifier using pre-prepared query data and a reusable
/// candidate buffer.
///
/// Avoids redundant query preparation, lowercasing, and allocation when
/// called repeatedly in a loop. `finder` must be the searcher built from
/// `pq` (see [`PreparedQuery::finder`]); it is `None` exactly when the
/// query is empty.
pub(crate) fn classify_prepared(
    candidate_text: &str,
    pq: &PreparedQuery,
    strip_diacritics: bool,
    candidate_buf: &mut String,
    finder: Option<&memchr::memmem::Finder<'_>>,
) -> RankTier {
    let candidate = fold_diacritics(candidate_text, strip_diacritics);

    // Step 1: a longer query can never match a shorter candidate.
    // ASCII fast path: byte length equals character count.
    let candidate_char_count = if candidate.is_ascii() {
        candidate.len()
    } else {
        candidate.chars().count()
    };
    if pq.char_count > candidate_char_count {
        return RankTier::NoMatch;
    }

    lowercase_into(&candidate, candidate_buf);

    // Empty query: a zero-length substring occurs at position 0 of every
    // candidate. The empty candidate is a full match, anything else a
    // prefix match.
    let Some(finder) = finder else {
        if candidate_buf.is_empty() {
            return RankTier::Equals;
        }
        return RankTier::StartsWith;
    };

    // Steps 2-5 all resolve from one substring scan over the lowercased
    // candidate.
    let candidate_bytes = candidate_buf.as_bytes();
    let mut occurrences = finder.find_iter(candidate_bytes);

    if let Some(first) = occurrences.next() {
        if first == 0 {
            // Step 2: occurrence at byte 0 with equal byte lengths means
            // the lowercased strings are identical.
            if candidate_buf.len() == pq.lower.len() {
                return RankTier::Equals;
            }
            // Step 3: starts with the query but is longer.
            return RankTier::StartsWith;
        }

        // Step 4: any occurrence immediately preceded by a space (0x20) is
        // a word start. `first > 0` here, and later positions only grow.
        if candidate_bytes[first - 1] == b' ' {
            return RankTier::WordStartsWith;
        }
        for pos in occurrences {
            if candidate_bytes[pos - 1] == b' ' {
                return RankTier::WordStartsWith;
            }
        }

        // Step 5: a substring occurrence exists, but never at a word start.
        return RankTier::Contains;
    }

    // Step 6: a single-character query that was not found as a substring is
    // absent from the candidate entirely, so the acronym and subsequence
    // checks cannot add anything.
    if pq.char_count == 1 {
        return RankTier::NoMatch;
    }

    // Step 7: acronym of the lowercased candidate.
    let acronym = acronym_of(candidate_buf);
    if acronym.contains(&pq.lower) {
        return RankTier::Acronym;
    }

    // Step 8: in-order character subsequence.
    if contains_in_order(candidate_buf, &pq.lower) {
        return RankTier::InOrderSubsequence;
    }

    RankTier::NoMatch
}

/// Classify how well a candidate string matches a query.
///
/// Both inputs are lowercased (and, when `strip_diacritics` is `true`,
/// diacritics-folded via [`fold_diacritics`]) before comparison; matching is
/// case-insensitive throughout. The decision procedure is evaluated in
/// priority order and the first matching tier wins:
///
/// 1. Query has more characters than the candidate → [`RankTier::NoMatch`]
/// 2. Exactly equal → [`RankTier::Equals`]
/// 3. Candidate begins with the query → [`RankTier::StartsWith`]
/// 4. Candidate contains `" " + query` → [`RankTier::WordStartsWith`]
/// 5. Candidate contains the query anywhere → [`RankTier::Contains`]
/// 6. Single-character query → [`RankTier::NoMatch`] immediately
/// 7. Candidate's acronym contains the query → [`RankTier::Acronym`]
/// 8. Query is an in-order subsequence → [`RankTier::InOrderSubsequence`],
///    otherwise [`RankTier::NoMatch`]
///
/// # Examples
///
/// ```
/// use tiersort::{RankTier, classify};
///
/// assert_eq!(classify("Green", "green", false), RankTier::Equals);
/// assert_eq!(classify("Greenland", "green", false), RankTier::StartsWith);
/// assert_eq!(classify("San Francisco", "fran", false), RankTier::WordStartsWith);
/// assert_eq!(classify("abc", "xyz", false), RankTier::NoMatch);
/// ```
pub fn classify(candidate: &str, query: &str, strip_diacritics: bool) -> RankTier {
    // Thin wrapper: construct a PreparedQuery for one-off calls.
    let pq = PreparedQuery::new(query, strip_diacritics);
    let finder = pq.finder();
    let mut buf = String::new();
    classify_prepared(candidate, &pq, strip_diacritics, &mut buf, finder.as_ref())
}
