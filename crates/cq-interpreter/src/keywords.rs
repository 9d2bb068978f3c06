//! Keyword matching shared by every vocabulary lookup.

use serde::{Deserialize, Serialize};

/// Keywords shorter than this must match a whole word under `WordStart`
/// (plural "s" allowed).
const SHORT_KEYWORD_LEN: usize = 4;

/// How a keyword is located in the query text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatch {
    /// Plain substring membership: "ev" is found in "every".
    #[default]
    Substring,
    /// Keyword must start a word; short keywords must also end it.
    WordStart,
}

impl KeywordMatch {
    /// Check whether `keyword` occurs in `text`. Both sides are expected
    /// to be lowercase. Empty keywords never match.
    pub fn contains(self, text: &str, keyword: &str) -> bool {
        if keyword.is_empty() {
            return false;
        }
        match self {
            KeywordMatch::Substring => text.contains(keyword),
            KeywordMatch::WordStart => contains_word(text, keyword),
        }
    }

    /// Check if the text contains any of the given keywords.
    pub fn matches_any<S: AsRef<str>>(self, text: &str, keywords: &[S]) -> bool {
        keywords.iter().any(|k| self.contains(text, k.as_ref()))
    }
}

/// Word-start match. A long keyword may run into the rest of a word
/// ("fastest", "cheaper"). A short one ("ev", "suv", "mg") must end the
/// word or be followed only by a plural "s", so "evs" matches while
/// "every" and "evening" do not.
fn contains_word(text: &str, keyword: &str) -> bool {
    let short = keyword.chars().count() < SHORT_KEYWORD_LEN;
    text.match_indices(keyword).any(|(pos, _)| {
        let starts_word = text[..pos]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        starts_word && (!short || ends_word(&text[pos + keyword.len()..]))
    })
}

/// True when `rest` begins at a word end, optionally after a plural "s".
fn ends_word(rest: &str) -> bool {
    let rest = rest.strip_prefix('s').unwrap_or(rest);
    rest.chars().next().is_none_or(|c| !c.is_alphanumeric())
}
