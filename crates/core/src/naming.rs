//! Icon name canonicalization and collation.

use icu::collator::options::CollatorOptions;
use icu::collator::{Collator, CollatorBorrowed};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("separator pattern is valid"));
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));
static VALID_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("name pattern is valid"));
static ROOT_COLLATOR: Lazy<CollatorBorrowed<'static>> = Lazy::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .expect("root collation data is compiled in")
});

/// Maps free-form user text onto the asset file naming convention.
///
/// `" Academic  Cap "` and `"academic_cap"` both become `"academic-cap"`.
/// Never fails; callers that need an on-disk name check
/// [`is_valid_icon_name`] afterwards.
pub fn normalize_icon_name(input: &str) -> String {
    let lowered = input.to_lowercase();
    let hyphenated = SEPARATOR_RUN.replace_all(lowered.trim(), "-");
    HYPHEN_RUN.replace_all(&hyphenated, "-").into_owned()
}

/// True for non-empty names made only of `[a-z0-9-]`. Anything else could
/// escape the style directory once joined into a path.
pub fn is_valid_icon_name(name: &str) -> bool {
    VALID_NAME.is_match(name)
}

/// Alphabetical order used for listings and search tie-breaks.
///
/// Root-locale collation at tertiary strength: punctuation sorts before
/// digits before letters (`_` < `-` < `0`), accents are a secondary
/// difference and lowercase precedes uppercase. Strings the collator deems
/// equal fall back to code point order so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.compare(a, b).then_with(|| a.cmp(b))
}
