// crates/airportdb-core/src/score.rs

//! Relevance scoring of one record against one folded search term.
//!
//! | Field      | Exact | Prefix | Contains |
//! |------------|-------|--------|----------|
//! | code       | 1000  | 500    | -        |
//! | short code | 900   | 450    | -        |
//! | name       | -     | 300    | 100      |
//! | city       | -     | 250    | 80       |
//!
//! Field scores are independent and summed. Both sides must already be
//! folded; nothing here touches case or diacritics.

use crate::model::SearchKeys;

pub const CODE_EXACT: u32 = 1000;
pub const CODE_PREFIX: u32 = 500;
pub const SHORT_CODE_EXACT: u32 = 900;
pub const SHORT_CODE_PREFIX: u32 = 450;
pub const NAME_PREFIX: u32 = 300;
pub const NAME_CONTAINS: u32 = 100;
pub const CITY_PREFIX: u32 = 250;
pub const CITY_CONTAINS: u32 = 80;

/// Total relevance of `keys` for `term`; `0` means no match.
#[inline]
pub fn score(keys: &SearchKeys, term: &str) -> u32 {
    if term.is_empty() {
        return 0;
    }
    identifier_score(&keys.code, term, CODE_EXACT, CODE_PREFIX)
        + identifier_score(&keys.short_code, term, SHORT_CODE_EXACT, SHORT_CODE_PREFIX)
        + text_score(&keys.name, term, NAME_PREFIX, NAME_CONTAINS)
        + text_score(&keys.city, term, CITY_PREFIX, CITY_CONTAINS)
}

/// Identifiers: exact, then prefix. No substring tier.
#[inline]
fn identifier_score(field: &str, term: &str, exact: u32, prefix: u32) -> u32 {
    if field.is_empty() {
        0
    } else if field == term {
        exact
    } else if field.starts_with(term) {
        prefix
    } else {
        0
    }
}

/// Free text: prefix, then substring. No exact tier.
#[inline]
fn text_score(field: &str, term: &str, prefix: u32, contains: u32) -> u32 {
    if field.is_empty() {
        0
    } else if field.starts_with(term) {
        prefix
    } else if field.contains(term) {
        contains
    } else {
        0
    }
}
