//! Attribute extractors: body type, fuel type, brand and feature tags.
//!
//! Single-valued attributes return the first vocabulary entry (in
//! configured order) with a keyword present in the text. Feature rules are
//! cumulative.

use cq_protocol::preferences::FeatureTag;

use crate::config::{FeatureRule, VocabularyEntry};
use crate::keywords::KeywordMatch;

/// First vocabulary entry whose keywords occur in `text`.
pub fn first_match<'a>(
    text: &str,
    vocabulary: &'a [VocabularyEntry],
    mode: KeywordMatch,
) -> Option<&'a str> {
    vocabulary
        .iter()
        .find(|entry| mode.matches_any(text, &entry.keywords))
        .map(|entry| entry.label.as_str())
}

/// Every tag implied by the text, de-duplicated, in rule order.
pub fn collect_features(text: &str, rules: &[FeatureRule], mode: KeywordMatch) -> Vec<FeatureTag> {
    let mut tags = Vec::new();
    for rule in rules.iter().filter(|r| mode.matches_any(text, &r.keywords)) {
        for tag in &rule.tags {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
    }
    tags
}
