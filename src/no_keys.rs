//! No-keys mode for ranking string-like items directly.
//!
//! When items are themselves strings, there is no need to construct
//! [`Key`](crate::key::Key) extractors. The [`AsCandidateStr`] trait
//! provides a uniform way to obtain a `&str` from any string-like type, and
//! [`rank_item`] uses it to classify items directly against a query.

use std::borrow::Cow;

use crate::ranking::{RankTier, classify};

/// Trait for types that can be ranked directly without field selectors.
///
/// Implementors expose their text via
/// [`as_candidate_str`](AsCandidateStr::as_candidate_str), letting the
/// pipeline classify them without key extraction.
///
/// # Built-in Implementations
///
/// - [`String`] — delegates to [`String::as_str`]
/// - [`str`] / `&str` — returns `self`
/// - [`Cow<'_, str>`] — delegates to [`AsRef::as_ref`]
///
/// # Examples
///
/// ```
/// use tiersort::AsCandidateStr;
///
/// let owned = String::from("hello");
/// assert_eq!(owned.as_candidate_str(), "hello");
///
/// let borrowed: &str = "world";
/// assert_eq!(borrowed.as_candidate_str(), "world");
/// ```
pub trait AsCandidateStr {
    /// Returns the text of this item for classification.
    fn as_candidate_str(&self) -> &str;
}

impl AsCandidateStr for String {
    fn as_candidate_str(&self) -> &str {
        self.as_str()
    }
}

impl AsCandidateStr for str {
    fn as_candidate_str(&self) -> &str {
        self
    }
}

// An explicit impl for `&str` is needed so that `T = &str` satisfies the
// `AsCandidateStr` bound without the caller double-referencing.
impl AsCandidateStr for &str {
    fn as_candidate_str(&self) -> &str {
        self
    }
}

impl AsCandidateStr for Cow<'_, str> {
    fn as_candidate_str(&self) -> &str {
        self.as_ref()
    }
}

/// Classify a string-like item directly against a query (no-keys mode).
///
/// Convenience wrapper around [`classify`] for items implementing
/// [`AsCandidateStr`].
///
/// # Examples
///
/// ```
/// use tiersort::{RankTier, rank_item};
///
/// let item = String::from("Greenland");
/// assert_eq!(rank_item(&item, "green", false), RankTier::StartsWith);
/// ```
pub fn rank_item<T: AsCandidateStr>(item: &T, query: &str, strip_diacritics: bool) -> RankTier {
    classify(item.as_candidate_str(), query, strip_diacritics)
}
