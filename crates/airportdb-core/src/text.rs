// crates/airportdb-core/src/text.rs

//! Text folding for search keys and query terms.
//!
//! Keys are folded once at load time and terms once per query, always with
//! the same [`Folding`], so the scorer can compare plain strings.

/// How text is folded before comparison.
///
/// Decided once per repository by [`Folding::detect`], never per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folding {
    /// Unicode -> ASCII transliteration, then lowercase (`Łódź` -> `lodz`).
    Transliterate,
    /// Lowercase only; diacritics are kept.
    Lowercase,
}

impl Folding {
    /// Picks the strongest folding this build supports.
    pub fn detect() -> Self {
        if cfg!(feature = "transliterate") {
            Folding::Transliterate
        } else {
            Folding::Lowercase
        }
    }

    pub fn fold(self, s: &str) -> String {
        match self {
            Folding::Transliterate => transliterate(s).to_lowercase(),
            Folding::Lowercase => s.to_lowercase(),
        }
    }
}

impl Default for Folding {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(feature = "transliterate")]
fn transliterate(s: &str) -> std::borrow::Cow<'_, str> {
    if s.is_ascii() {
        std::borrow::Cow::Borrowed(s)
    } else {
        std::borrow::Cow::Owned(deunicode::deunicode(s))
    }
}

#[cfg(not(feature = "transliterate"))]
fn transliterate(s: &str) -> std::borrow::Cow<'_, str> {
    std::borrow::Cow::Borrowed(s)
}

/// Convert a string into a folded key suitable for indexing and comparison,
/// using the default [`Folding`] of this build.
///
/// # Examples
///
/// ```rust
/// use airportdb_core::text::fold_key;
///
/// assert_eq!(fold_key("JFK"), "jfk");
/// assert_eq!(fold_key("New York"), "new york");
/// ```
pub fn fold_key(s: &str) -> String {
    Folding::detect().fold(s)
}

/// Cuts `s` down to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
