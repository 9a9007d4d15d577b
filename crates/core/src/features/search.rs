//! Ranked fuzzy search over icon names.
//!
//! A score is a base value from the first matching [`BaseRule`] plus a
//! per-token bonus. The rule order and the numbers are part of the output
//! contract: clients compare scores across releases.

use heroscope_api::{Result, ScoredIcon, SearchResult, Style};

use super::listing::list_all;
use crate::asset::AssetIndex;
use crate::naming::compare_names;

const SEGMENT_BONUS: u32 = 8;
const SUBSTRING_BONUS: u32 = 4;

/// Everything the rules need to know about one (name, query) pair.
struct MatchFacts<'a> {
    raw_name: String,
    raw_query: &'a str,
    normalized_name: String,
    normalized_query: String,
    tokens: Vec<String>,
}

impl<'a> MatchFacts<'a> {
    fn new(name: &str, raw_query: &'a str) -> Self {
        let normalized_query = normalize_for_search(raw_query);
        let tokens = normalized_query
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            raw_name: name.to_lowercase(),
            raw_query,
            normalized_name: normalize_for_search(name),
            normalized_query,
            tokens,
        }
    }

    fn exact(&self) -> bool {
        self.raw_name == self.raw_query
    }

    fn prefix(&self) -> bool {
        self.raw_name.starts_with(self.raw_query)
    }

    fn raw_contains(&self) -> bool {
        self.raw_name.contains(self.raw_query)
    }

    fn normalized_contains(&self) -> bool {
        self.normalized_name.contains(&self.normalized_query)
    }

    fn all_tokens(&self) -> bool {
        !self.tokens.is_empty()
            && self
                .tokens
                .iter()
                .all(|token| self.normalized_name.contains(token.as_str()))
    }

    fn is_candidate(&self) -> bool {
        self.raw_contains() || self.normalized_contains() || self.all_tokens()
    }

    fn token_bonus(&self, token: &str) -> u32 {
        if self.raw_name.split('-').any(|segment| segment == token) {
            SEGMENT_BONUS
        } else if self.normalized_name.contains(token) {
            SUBSTRING_BONUS
        } else {
            0
        }
    }
}

/// Base-score rules, highest priority first. The first rule that applies wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BaseRule {
    Exact,
    Prefix,
    Substring,
    AllTokens,
}

const BASE_RULES: [BaseRule; 4] = [
    BaseRule::Exact,
    BaseRule::Prefix,
    BaseRule::Substring,
    BaseRule::AllTokens,
];

impl BaseRule {
    fn applies(self, facts: &MatchFacts<'_>) -> bool {
        match self {
            BaseRule::Exact => facts.exact(),
            BaseRule::Prefix => facts.prefix(),
            BaseRule::Substring => facts.normalized_contains() || facts.raw_contains(),
            BaseRule::AllTokens => facts.all_tokens(),
        }
    }

    fn score(self) -> u32 {
        match self {
            BaseRule::Exact => 120,
            BaseRule::Prefix => 100,
            BaseRule::Substring => 80,
            BaseRule::AllTokens => 60,
        }
    }
}

/// Lowercase, treat `-`/`_` runs as spaces, collapse whitespace, trim.
fn normalize_for_search(value: &str) -> String {
    value
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score `name` against `query`, or `None` when it does not match at all.
pub fn score_match(name: &str, query: &str) -> Option<u32> {
    let raw_query = query.to_lowercase();
    let facts = MatchFacts::new(name, raw_query.trim());
    if !facts.is_candidate() {
        return None;
    }

    let base = BASE_RULES
        .iter()
        .find(|rule| rule.applies(&facts))
        .map_or(0, |rule| rule.score());
    let bonus: u32 = facts
        .tokens
        .iter()
        .map(|token| facts.token_bonus(token))
        .sum();

    Some(base + bonus)
}

/// Rank every icon in scope against `query`.
///
/// A blank query matches nothing rather than the whole collection. Results
/// are ordered by score (descending), then style priority, then name.
pub fn search(index: &AssetIndex, query: &str, style: Option<Style>) -> Result<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(SearchResult::empty(query, Style::scope(style)));
    }

    let listed = list_all(index, style)?;
    let mut icons: Vec<ScoredIcon> = listed
        .icons
        .into_iter()
        .filter_map(|icon| {
            score_match(&icon.name, query).map(|score| ScoredIcon {
                name: icon.name,
                style: icon.style,
                score,
            })
        })
        .collect();

    icons.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.style.priority().cmp(&b.style.priority()))
            .then_with(|| compare_names(&a.name, &b.name))
    });

    Ok(SearchResult {
        total: icons.len(),
        icons,
        query: query.to_string(),
        styles: listed.styles,
    })
}
