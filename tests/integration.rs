//! End-to-end tests for the `tier_sort` pipeline.
//!
//! Each section exercises one observable property of the public API: tier
//! grouping, ordering stability, selector priority, thresholds, and the
//! pinned empty-query behavior.

use tiersort::{AsCandidateStr, Key, RankTier, TierSortOptions, tier_sort};

// ---------------------------------------------------------------------------
// Shared test types
// ---------------------------------------------------------------------------

/// A record with a single matchable field.
#[derive(Debug, PartialEq)]
struct Named {
    name: String,
}

impl Named {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

// `AsCandidateStr` is required by the bound on `tier_sort` even when keys
// are provided; struct items delegate to their primary field.
impl AsCandidateStr for Named {
    fn as_candidate_str(&self) -> &str {
        &self.name
    }
}

/// A record with four fields of decreasing declared priority.
#[derive(Debug, PartialEq)]
struct Fielded {
    label: &'static str,
    first: String,
    second: String,
    third: String,
    fourth: String,
}

impl Fielded {
    fn new(label: &'static str, matching: usize) -> Self {
        // Place "matcher" in exactly one field and filler in the rest, so
        // every record matches the query "match" at the same tier but via a
        // different selector.
        let field = |i: usize| {
            if i == matching {
                "matcher".to_owned()
            } else {
                "zzz".to_owned()
            }
        };
        Self {
            label,
            first: field(0),
            second: field(1),
            third: field(2),
            fourth: field(3),
        }
    }
}

impl AsCandidateStr for Fielded {
    fn as_candidate_str(&self) -> &str {
        &self.first
    }
}

fn string_opts() -> TierSortOptions<&'static str> {
    TierSortOptions::default()
}

// ---------------------------------------------------------------------------
// Tier grouping
// ---------------------------------------------------------------------------

/// Candidates exercising every tier against one query group strictly by
/// tier, best first, whatever the input order.
#[test]
fn output_groups_strictly_by_tier() {
    let items = [
        "axbxcx",              // InOrderSubsequence
        "zabcz",               // Contains
        "abc",                 // Equals
        "zzz",                 // NoMatch, dropped
        "apple banana cherry", // Acronym
        "abcde",               // StartsWith
        "zz abcy",             // WordStartsWith
    ];
    let results = tier_sort(&items, "abc", &string_opts());
    assert_eq!(
        results,
        vec![
            &"abc",
            &"abcde",
            &"zz abcy",
            &"zabcz",
            &"apple banana cherry",
            &"axbxcx",
        ]
    );
}

/// Exact match first, then prefix, then substring.
#[test]
fn exact_beats_prefix_beats_substring() {
    let items = ["pineapple", "apple", "applesauce"];
    let results = tier_sort(&items, "apple", &string_opts());
    assert_eq!(results, vec![&"apple", &"applesauce", &"pineapple"]);
}

/// Matching is case-insensitive end to end.
#[test]
fn case_insensitive_matching() {
    let items = ["Green", "Red", "Blue"];
    let results = tier_sort(&items, "green", &string_opts());
    assert_eq!(results, vec![&"Green"]);
}

// ---------------------------------------------------------------------------
// Ordering stability
// ---------------------------------------------------------------------------

/// Items of identical tier (and selector) keep their original relative
/// order.
#[test]
fn equal_tiers_preserve_input_order() {
    let items = ["Foo1", "Bar", "Foo2"];
    let results = tier_sort(&items, "foo", &string_opts());
    assert_eq!(results, vec![&"Foo1", &"Foo2"]);
}

/// Stability holds within every tier group, not just the best one.
#[test]
fn stability_within_each_tier_group() {
    let items = ["xabcx", "abcd", "yabcy", "abce"];
    let results = tier_sort(&items, "abc", &string_opts());
    // StartsWith group keeps (abcd, abce); Contains group keeps
    // (xabcx, yabcy).
    assert_eq!(results, vec![&"abcd", &"abce", &"xabcx", &"yabcy"]);
}

/// Re-sorting already-sorted output yields the same sequence.
#[test]
fn sorting_is_idempotent() {
    let items = [
        "axbxcx",
        "zabcz",
        "abc",
        "apple banana cherry",
        "abcde",
        "zz abcy",
    ];
    let once: Vec<&str> = tier_sort(&items, "abc", &string_opts())
        .into_iter()
        .copied()
        .collect();
    let twice: Vec<&str> = tier_sort(&once, "abc", &TierSortOptions::default())
        .into_iter()
        .copied()
        .collect();
    assert_eq!(once, twice);
}

// ---------------------------------------------------------------------------
// Exclusion rules
// ---------------------------------------------------------------------------

/// A query longer than an item's text excludes that item.
#[test]
fn longer_query_never_matches() {
    let items = ["ab", "abc"];
    let results = tier_sort(&items, "abcdef", &string_opts());
    assert!(results.is_empty());
}

/// Single-character queries never match via the acronym or subsequence
/// tiers.
#[test]
fn single_char_query_matches_substrings_only() {
    let items = ["abc"];
    let results = tier_sort(&items, "d", &string_opts());
    assert!(results.is_empty());
}

/// The empty collection yields the empty result.
#[test]
fn empty_input_yields_empty_output() {
    let items: [&str; 0] = [];
    let results = tier_sort(&items, "anything", &string_opts());
    assert!(results.is_empty());
}

/// No candidate reaching even the lowest tier is a normal empty result, not
/// an error.
#[test]
fn no_matches_is_empty_not_an_error() {
    let items = ["alpha", "beta", "gamma"];
    let results = tier_sort(&items, "zzz", &string_opts());
    assert!(results.is_empty());
}

// ---------------------------------------------------------------------------
// Pinned empty-query behavior
// ---------------------------------------------------------------------------

/// The empty query matches every candidate and preserves input order.
#[test]
fn empty_query_matches_everything_in_input_order() {
    let items = ["cherry", "apple", "banana"];
    let results = tier_sort(&items, "", &string_opts());
    assert_eq!(results, vec![&"cherry", &"apple", &"banana"]);
}

// ---------------------------------------------------------------------------
// Key-based ranking
// ---------------------------------------------------------------------------

/// Records rank through the configured selector.
#[test]
fn named_records_rank_through_key() {
    let items = vec![Named::new("baz"), Named::new("bat"), Named::new("foo")];
    let opts = TierSortOptions {
        keys: vec![Key::<Named>::from_fn(|n| n.name.as_str())],
        ..Default::default()
    };
    let results = tier_sort(&items, "ba", &opts);
    assert_eq!(results, vec![&Named::new("baz"), &Named::new("bat")]);
}

/// At equal tier, a match via an earlier-declared selector sorts before a
/// match via a later one, regardless of input order.
#[test]
fn earlier_selector_outranks_later_at_equal_tier() {
    let items = vec![
        Fielded::new("fourth", 3),
        Fielded::new("third", 2),
        Fielded::new("second", 1),
        Fielded::new("first", 0),
    ];
    let opts = TierSortOptions {
        keys: vec![
            Key::<Fielded>::from_fn(|f| f.first.as_str()),
            Key::<Fielded>::from_fn(|f| f.second.as_str()),
            Key::<Fielded>::from_fn(|f| f.third.as_str()),
            Key::<Fielded>::from_fn(|f| f.fourth.as_str()),
        ],
        ..Default::default()
    };
    let results = tier_sort(&items, "match", &opts);
    let labels: Vec<&str> = results.iter().map(|f| f.label).collect();
    assert_eq!(labels, vec!["first", "second", "third", "fourth"]);
}

/// Tier still dominates selector position: a later key's better tier wins.
#[test]
fn tier_dominates_selector_position() {
    let items = vec![
        // Matches "bat" on `first` only at Contains ("xbatx").
        Fielded {
            label: "contains-via-first",
            first: "xbatx".to_owned(),
            second: "zzz".to_owned(),
            third: "zzz".to_owned(),
            fourth: "zzz".to_owned(),
        },
        // Matches "bat" on `fourth` at Equals.
        Fielded {
            label: "equals-via-fourth",
            first: "zzz".to_owned(),
            second: "zzz".to_owned(),
            third: "zzz".to_owned(),
            fourth: "bat".to_owned(),
        },
    ];
    let opts = TierSortOptions {
        keys: vec![
            Key::<Fielded>::from_fn(|f| f.first.as_str()),
            Key::<Fielded>::from_fn(|f| f.second.as_str()),
            Key::<Fielded>::from_fn(|f| f.third.as_str()),
            Key::<Fielded>::from_fn(|f| f.fourth.as_str()),
        ],
        ..Default::default()
    };
    let results = tier_sort(&items, "bat", &opts);
    let labels: Vec<&str> = results.iter().map(|f| f.label).collect();
    assert_eq!(labels, vec!["equals-via-fourth", "contains-via-first"]);
}

/// A multi-valued selector matches any of its values.
#[test]
fn multi_valued_key_matches_any_value() {
    struct Tagged {
        name: String,
        tags: Vec<String>,
    }
    impl AsCandidateStr for Tagged {
        fn as_candidate_str(&self) -> &str {
            &self.name
        }
    }

    let items = vec![
        Tagged {
            name: "one".to_owned(),
            tags: vec!["red".to_owned(), "blue".to_owned()],
        },
        Tagged {
            name: "two".to_owned(),
            tags: vec!["green".to_owned()],
        },
    ];
    let opts = TierSortOptions {
        keys: vec![Key::new(|t: &Tagged| t.tags.clone())],
        ..Default::default()
    };
    let results = tier_sort(&items, "blue", &opts);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "one");
}

// ---------------------------------------------------------------------------
// Thresholds and clamps through the pipeline
// ---------------------------------------------------------------------------

/// The global threshold excludes tiers below it.
#[test]
fn global_threshold_excludes_weak_matches() {
    let items = ["abcde", "axbxcx"];
    let opts = TierSortOptions::<&str> {
        threshold: RankTier::Contains,
        ..Default::default()
    };
    // "axbxcx" only reaches InOrderSubsequence and is dropped.
    let results = tier_sort(&items, "abc", &opts);
    assert_eq!(results, vec![&"abcde"]);
}

/// A key's threshold override is stricter than the global default.
#[test]
fn key_threshold_override_applies() {
    let items = vec![Named::new("zabcz"), Named::new("abcde")];
    let opts = TierSortOptions {
        keys: vec![
            Key::<Named>::from_fn(|n| n.name.as_str()).threshold(RankTier::StartsWith),
        ],
        ..Default::default()
    };
    let results = tier_sort(&items, "abc", &opts);
    assert_eq!(results, vec![&Named::new("abcde")]);
}

/// `max_ranking` demotes a key's matches in the final order.
#[test]
fn max_ranking_demotes_in_final_order() {
    let items = vec![Named::new("abc"), Named::new("zabcz")];
    let opts = TierSortOptions {
        keys: vec![
            Key::<Named>::from_fn(|n| n.name.as_str()).max_ranking(RankTier::Contains),
        ],
        ..Default::default()
    };
    // "abc" would be Equals but is capped to Contains, tying with "zabcz";
    // input order decides.
    let results = tier_sort(&items, "abc", &opts);
    assert_eq!(results, vec![&Named::new("abc"), &Named::new("zabcz")]);
}

// ---------------------------------------------------------------------------
// Diacritics folding through the pipeline
// ---------------------------------------------------------------------------

/// Folding is off by default: accented candidates do not match their plain
/// forms.
#[test]
fn diacritics_preserved_by_default() {
    let items = ["caf\u{00e9}", "cafe"];
    let results = tier_sort(&items, "cafe", &string_opts());
    assert_eq!(results, vec![&"cafe"]);
}

/// With folding enabled, accented and plain forms match alike and keep
/// input order.
#[test]
fn diacritics_folded_on_request() {
    let items = ["caf\u{00e9}", "cafe"];
    let opts = TierSortOptions::<&str> {
        strip_diacritics: true,
        ..Default::default()
    };
    let results = tier_sort(&items, "cafe", &opts);
    assert_eq!(results, vec![&"caf\u{00e9}", &"cafe"]);
}

// ---------------------------------------------------------------------------
// Input handling
// ---------------------------------------------------------------------------

/// The input collection is left untouched.
#[test]
fn input_is_never_mutated() {
    let items = vec!["banana".to_owned(), "apple".to_owned()];
    let _ = tier_sort(&items, "ap", &TierSortOptions::default());
    assert_eq!(items, vec!["banana".to_owned(), "apple".to_owned()]);
}

/// Output entries borrow the original items.
#[test]
fn output_borrows_original_items() {
    let items = vec!["apple".to_owned()];
    let results = tier_sort(&items, "app", &TierSortOptions::default());
    assert!(std::ptr::eq(results[0], &items[0]));
}

/// String, `&str`, and owned collections all work through the same entry
/// point.
#[test]
fn works_across_string_like_types() {
    let owned = vec!["apple".to_owned(), "grape".to_owned()];
    let results = tier_sort(&owned, "ap", &TierSortOptions::default());
    assert_eq!(results.len(), 2);

    let borrowed = ["apple", "grape"];
    let results = tier_sort(&borrowed, "ap", &TierSortOptions::default());
    assert_eq!(results.len(), 2);
}
