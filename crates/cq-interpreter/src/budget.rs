//! Budget extraction: amounts in lakh/crore, then budget keywords.
//!
//! Numeric rules are tried in a fixed priority order and the first match
//! wins. Only when no amount is present do the keyword categories apply.

use regex::Regex;

use cq_protocol::preferences::Budget;

use crate::config::BudgetKeywordRule;
use crate::error::{InterpreterError, InterpreterResult};
use crate::keywords::KeywordMatch;

pub const LAKH: u64 = 100_000;
pub const CRORE: u64 = 10_000_000;

// Optional currency prefix, then the amount (decimals allowed). No word
// boundary before the digits, so "rs10" and "under20" still parse.
const AMOUNT: &str = r"(?:rs\.?\s*|₹\s*)?(\d+(?:\.\d+)?)";
const LAKH_UNIT: &str = r"(?:lakhs?|lacs?|l)\b";
const ANY_UNIT: &str = r"(?:lakhs?|lacs?|l|crores?|cr)\b";
const CRORE_UNIT: &str = r"(?:crores?|cr)\b";

/// A named amount pattern. Capture group 1 is the number.
struct BudgetRule {
    name: &'static str,
    pattern: Regex,
}

/// Ordered numeric budget rules.
pub struct BudgetRules {
    rules: Vec<BudgetRule>,
}

impl BudgetRules {
    /// Compile the standard rule table: "under N", "below N", bare
    /// "N lakh", then "N cr".
    pub fn standard() -> InterpreterResult<Self> {
        let table = [
            ("under", format!(r"\bunder\s*{AMOUNT}\s*{ANY_UNIT}")),
            ("below", format!(r"\bbelow\s*{AMOUNT}\s*{ANY_UNIT}")),
            ("lakh", format!(r"{AMOUNT}\s*{LAKH_UNIT}")),
            ("crore", format!(r"{AMOUNT}\s*{CRORE_UNIT}")),
        ];

        let rules = table
            .into_iter()
            .map(|(name, src)| {
                Regex::new(&src)
                    .map(|pattern| BudgetRule { name, pattern })
                    .map_err(|e| InterpreterError::Pattern(format!("{name}: {e}")))
            })
            .collect::<InterpreterResult<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Names of the rules in priority order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    /// Extract an upper bound from the first matching amount pattern.
    pub fn extract_amount(&self, text: &str) -> Option<Budget> {
        for rule in &self.rules {
            let Some(caps) = rule.pattern.captures(text) else {
                continue;
            };
            let matched = caps.get(0)?.as_str();
            let value: f64 = caps.get(1)?.as_str().parse().ok()?;
            let scale = if matched.contains("cr") { CRORE } else { LAKH };
            let max = to_base_units(value, scale);
            tracing::trace!(rule = rule.name, matched, max, "budget amount matched");
            return Some(Budget::up_to(max));
        }
        None
    }

    /// Full budget extraction: amount patterns first, then keyword categories
    /// in configured order.
    pub fn extract(
        &self,
        text: &str,
        keyword_rules: &[BudgetKeywordRule],
        mode: KeywordMatch,
    ) -> Option<Budget> {
        if let Some(budget) = self.extract_amount(text) {
            return Some(budget);
        }
        keyword_rules
            .iter()
            .find(|rule| mode.matches_any(text, &rule.keywords))
            .map(BudgetKeywordRule::budget)
    }
}

/// Scale a lakh/crore amount to base units, rounding away float noise
/// ("0.1 lakh" is exactly 10,000). Out-of-range values saturate.
fn to_base_units(value: f64, scale: u64) -> u64 {
    (value * scale as f64).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterpreterConfig;

    fn extract(text: &str) -> Option<Budget> {
        let rules = BudgetRules::standard().unwrap();
        rules.extract(
            text,
            &InterpreterConfig::default().budget_keywords,
            KeywordMatch::Substring,
        )
    }

    #[test]
    fn rule_priority_order() {
        let rules = BudgetRules::standard().unwrap();
        assert_eq!(rules.rule_names(), vec!["under", "below", "lakh", "crore"]);
    }

    #[test]
    fn under_lakhs() {
        assert_eq!(extract("under 20 lakhs"), Some(Budget::up_to(2_000_000)));
    }

    #[test]
    fn below_lakh() {
        assert_eq!(extract("suv below 15 lakh"), Some(Budget::up_to(1_500_000)));
    }

    #[test]
    fn bare_lakh_short_unit() {
        assert_eq!(extract("something around 8l"), Some(Budget::up_to(800_000)));
        assert_eq!(extract("8 l budget"), Some(Budget::up_to(800_000)));
    }

    #[test]
    fn crore_amount() {
        assert_eq!(extract("2 cr"), Some(Budget::up_to(20_000_000)));
        assert_eq!(extract("1.5 crore sedan"), Some(Budget::up_to(15_000_000)));
    }

    #[test]
    fn under_crore_is_crore_scaled() {
        assert_eq!(extract("under 1 cr"), Some(Budget::up_to(CRORE)));
    }

    #[test]
    fn decimal_lakhs() {
        assert_eq!(extract("under 7.5 lakhs"), Some(Budget::up_to(750_000)));
        assert_eq!(extract("0.1 lakh"), Some(Budget::up_to(10_000)));
    }

    #[test]
    fn currency_prefix_tolerated() {
        assert_eq!(extract("under rs 10 lakh"), Some(Budget::up_to(1_000_000)));
        assert_eq!(extract("under ₹12 lakh"), Some(Budget::up_to(1_200_000)));
    }

    #[test]
    fn amount_glued_to_prefix() {
        assert_eq!(extract("rs10 lakh"), Some(Budget::up_to(1_000_000)));
        assert_eq!(extract("under20 lakhs"), Some(Budget::up_to(2_000_000)));
        assert_eq!(extract("below₹5 lakh"), Some(Budget::up_to(500_000)));
        assert_eq!(extract("under rs.12l"), Some(Budget::up_to(1_200_000)));
    }

    #[test]
    fn under_beats_bare_amount() {
        // Both "under 10 lakh" and "25 lakh" are present; "under" is tried first.
        assert_eq!(
            extract("25 lakh is too much, under 10 lakh please"),
            Some(Budget::up_to(1_000_000))
        );
    }

    #[test]
    fn amount_beats_keyword() {
        assert_eq!(
            extract("luxury sedan under 30 lakhs"),
            Some(Budget::up_to(3_000_000))
        );
    }

    #[test]
    fn litres_are_not_lakhs() {
        assert_eq!(extract("a 40 litre boot"), None);
    }

    #[test]
    fn budget_keyword() {
        assert_eq!(extract("budget car"), Some(Budget::up_to(2_000_000)));
        assert_eq!(extract("something affordable"), Some(Budget::up_to(2_000_000)));
        assert_eq!(extract("cheap hatchback"), Some(Budget::up_to(2_000_000)));
    }

    #[test]
    fn premium_keyword() {
        assert_eq!(extract("premium sedan"), Some(Budget::at_least(5_000_000)));
        assert_eq!(extract("luxury suv"), Some(Budget::at_least(5_000_000)));
    }

    #[test]
    fn affordable_category_checked_before_premium() {
        assert_eq!(
            extract("affordable luxury"),
            Some(Budget::up_to(2_000_000))
        );
    }

    #[test]
    fn no_budget() {
        assert_eq!(extract("red suv"), None);
        assert_eq!(extract(""), None);
        assert_eq!(extract("i want 2 cars"), None);
    }

    #[test]
    fn huge_amount_saturates() {
        let budget = extract("under 99999999999999999999999 lakh").unwrap();
        assert_eq!(budget.max, Some(u64::MAX));
    }
}
