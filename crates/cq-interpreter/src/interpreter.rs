//! The query interpreter: extractors, aggregation and ranking behind one
//! configured value.

use cq_protocol::car::Car;
use cq_protocol::preferences::{Budget, FeatureTag, QueryPreferences};

use crate::attributes::{collect_features, first_match};
use crate::budget::BudgetRules;
use crate::config::{InterpreterConfig, VocabularyEntry};
use crate::error::InterpreterResult;
use crate::ranking::rank_candidates;

/// Rule-based interpreter for free-text car queries.
///
/// Holds only immutable configuration and compiled patterns, so one
/// instance can be shared across threads behind an `Arc`.
pub struct Interpreter {
    config: InterpreterConfig,
    budget_rules: BudgetRules,
}

impl Interpreter {
    /// Build an interpreter from a validated configuration.
    pub fn new(config: InterpreterConfig) -> InterpreterResult<Self> {
        config.validate()?;
        Ok(Self {
            config: config.normalized(),
            budget_rules: BudgetRules::standard()?,
        })
    }

    /// Interpreter with the built-in vocabularies.
    pub fn standard() -> InterpreterResult<Self> {
        Self::new(InterpreterConfig::default())
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn extract_budget(&self, text: &str) -> Option<Budget> {
        self.budget(&normalize(text))
    }

    pub fn extract_body_type(&self, text: &str) -> Option<String> {
        self.label(&normalize(text), &self.config.body_types)
    }

    pub fn extract_fuel_type(&self, text: &str) -> Option<String> {
        self.label(&normalize(text), &self.config.fuel_types)
    }

    pub fn extract_brand(&self, text: &str) -> Option<String> {
        self.label(&normalize(text), &self.config.brands)
    }

    pub fn extract_features(&self, text: &str) -> Vec<FeatureTag> {
        self.features(&normalize(text))
    }

    /// Run every extractor over the query and combine the results.
    pub fn parse(&self, text: &str) -> QueryPreferences {
        let text = normalize(text);
        let prefs = compose(
            self.budget(&text),
            self.label(&text, &self.config.body_types),
            self.label(&text, &self.config.fuel_types),
            self.label(&text, &self.config.brands),
            self.features(&text),
        );
        tracing::debug!(query = %text, preferences = ?prefs, "query parsed");
        prefs
    }

    /// Filter, sort and cap candidates for already-parsed preferences.
    pub fn rank(&self, prefs: &QueryPreferences, candidates: &[Car]) -> Vec<Car> {
        rank_candidates(
            prefs,
            candidates,
            &self.config.thresholds,
            self.config.result_limit,
        )
    }

    /// Parse the query and rank candidates in one step.
    pub fn interpret(&self, text: &str, candidates: &[Car]) -> Vec<Car> {
        let prefs = self.parse(text);
        let ranked = self.rank(&prefs, candidates);
        tracing::debug!(
            candidates = candidates.len(),
            matched = ranked.len(),
            "candidates ranked"
        );
        ranked
    }
}

impl Interpreter {
    fn budget(&self, text: &str) -> Option<Budget> {
        self.budget_rules
            .extract(text, &self.config.budget_keywords, self.config.keyword_match)
    }

    fn label(&self, text: &str, vocabulary: &[VocabularyEntry]) -> Option<String> {
        first_match(text, vocabulary, self.config.keyword_match).map(String::from)
    }

    fn features(&self, text: &str) -> Vec<FeatureTag> {
        collect_features(text, &self.config.features, self.config.keyword_match)
    }
}

/// Combine extractor outputs into a preference record. No validation.
pub fn compose(
    budget: Option<Budget>,
    body_type: Option<String>,
    fuel_type: Option<String>,
    brand: Option<String>,
    features: Vec<FeatureTag>,
) -> QueryPreferences {
    QueryPreferences {
        budget,
        body_type,
        fuel_type,
        brand,
        features,
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
