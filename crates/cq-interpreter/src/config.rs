//! Interpreter configuration, loadable from TOML.
//!
//! Vocabularies are ordered: when a query mentions several entries of the
//! same vocabulary, the entry listed first wins. Every section has a
//! built-in default, so an empty TOML document is a valid configuration.

use serde::{Deserialize, Serialize};

use cq_protocol::preferences::{Budget, FeatureTag};

use crate::error::{InterpreterError, InterpreterResult};
use crate::keywords::KeywordMatch;

/// One canonical value and the words that select it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Value placed in the preference record (e.g., "Electric").
    pub label: String,
    /// Lowercase words that select this entry (e.g., ["electric", "ev"]).
    pub keywords: Vec<String>,
}

/// Intent words that add one or more feature tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRule {
    pub keywords: Vec<String>,
    pub tags: Vec<FeatureTag>,
}

/// Budget words used when no numeric amount is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetKeywordRule {
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

impl BudgetKeywordRule {
    pub fn budget(&self) -> Budget {
        Budget {
            min: self.min,
            max: self.max,
        }
    }
}

/// Numeric cut-offs implied by feature tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingThresholds {
    /// `efficient` keeps cars with mileage strictly above this (km/l).
    #[serde(default = "default_efficient_min_kmpl")]
    pub efficient_min_kmpl: f64,
    /// `powerful` keeps cars with power strictly above this (bhp).
    #[serde(default = "default_powerful_min_bhp")]
    pub powerful_min_bhp: f64,
    /// `spacious` keeps cars seating at least this many.
    #[serde(default = "default_spacious_min_seats")]
    pub spacious_min_seats: u32,
}

fn default_efficient_min_kmpl() -> f64 {
    15.0
}

fn default_powerful_min_bhp() -> f64 {
    200.0
}

fn default_spacious_min_seats() -> u32 {
    5
}

impl Default for RankingThresholds {
    fn default() -> Self {
        Self {
            efficient_min_kmpl: default_efficient_min_kmpl(),
            powerful_min_bhp: default_powerful_min_bhp(),
            spacious_min_seats: default_spacious_min_seats(),
        }
    }
}

/// Top-level interpreter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    #[serde(default = "default_body_types")]
    pub body_types: Vec<VocabularyEntry>,
    #[serde(default = "default_fuel_types")]
    pub fuel_types: Vec<VocabularyEntry>,
    #[serde(default = "default_brands")]
    pub brands: Vec<VocabularyEntry>,
    #[serde(default = "default_features")]
    pub features: Vec<FeatureRule>,
    #[serde(default = "default_budget_keywords")]
    pub budget_keywords: Vec<BudgetKeywordRule>,
    #[serde(default)]
    pub thresholds: RankingThresholds,
    /// Maximum number of ranked results.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// Substring membership unless set to `word_start`.
    #[serde(default)]
    pub keyword_match: KeywordMatch,
}

fn entry(label: &str, keywords: &[&str]) -> VocabularyEntry {
    VocabularyEntry {
        label: label.to_string(),
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
    }
}

fn default_body_types() -> Vec<VocabularyEntry> {
    ["suv", "sedan", "hatchback", "coupe", "convertible", "mpv"]
        .iter()
        .map(|k| entry(&k.to_uppercase(), &[k]))
        .collect()
}

fn default_fuel_types() -> Vec<VocabularyEntry> {
    vec![
        entry("Electric", &["electric", "ev"]),
        entry("Petrol", &["petrol", "gasoline"]),
        entry("Diesel", &["diesel"]),
        entry("Hybrid", &["hybrid"]),
        entry("CNG", &["cng"]),
    ]
}

fn default_brands() -> Vec<VocabularyEntry> {
    vec![
        entry("Maruti", &["maruti", "suzuki"]),
        entry("Hyundai", &["hyundai"]),
        entry("Tata", &["tata"]),
        entry("Mahindra", &["mahindra"]),
        entry("Kia", &["kia"]),
        entry("Toyota", &["toyota"]),
        entry("Honda", &["honda"]),
        entry("MG", &["mg"]),
        entry("Skoda", &["skoda"]),
        entry("Volkswagen", &["volkswagen", "vw"]),
        entry("Renault", &["renault"]),
        entry("Nissan", &["nissan"]),
        entry("Ford", &["ford"]),
        entry("Jeep", &["jeep"]),
        entry("BMW", &["bmw"]),
        entry("Mercedes", &["mercedes", "benz"]),
        entry("Audi", &["audi"]),
        entry("Volvo", &["volvo"]),
        entry("Lexus", &["lexus"]),
        entry("Jaguar", &["jaguar"]),
        entry("Land Rover", &["land rover", "range rover"]),
        entry("Porsche", &["porsche"]),
        entry("Tesla", &["tesla"]),
        entry("BYD", &["byd"]),
        entry("Citroen", &["citroen"]),
    ]
}

fn default_features() -> Vec<FeatureRule> {
    let rule = |keywords: &[&str], tags: &[FeatureTag]| FeatureRule {
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        tags: tags.to_vec(),
    };
    vec![
        rule(&["family"], &[FeatureTag::Spacious, FeatureTag::Safe]),
        rule(&["mileage", "fuel efficient"], &[FeatureTag::Efficient]),
        rule(&["performance", "fast", "sporty"], &[FeatureTag::Powerful]),
        rule(&["city"], &[FeatureTag::Compact]),
    ]
}

fn default_budget_keywords() -> Vec<BudgetKeywordRule> {
    vec![
        BudgetKeywordRule {
            keywords: vec!["budget".into(), "affordable".into(), "cheap".into()],
            min: None,
            max: Some(2_000_000),
        },
        BudgetKeywordRule {
            keywords: vec!["premium".into(), "luxury".into()],
            min: Some(5_000_000),
            max: None,
        },
    ]
}

fn default_result_limit() -> usize {
    5
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            body_types: default_body_types(),
            fuel_types: default_fuel_types(),
            brands: default_brands(),
            features: default_features(),
            budget_keywords: default_budget_keywords(),
            thresholds: RankingThresholds::default(),
            result_limit: default_result_limit(),
            keyword_match: KeywordMatch::default(),
        }
    }
}

impl InterpreterConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(contents: &str) -> InterpreterResult<Self> {
        toml::from_str(contents).map_err(|e| InterpreterError::Config(e.to_string()))
    }

    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> InterpreterResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InterpreterError::NotFound(path.to_string())
            } else {
                InterpreterError::Io(format!("{path}: {e}"))
            }
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject entries that could never match or would match everything.
    pub fn validate(&self) -> InterpreterResult<()> {
        if self.result_limit == 0 {
            return Err(InterpreterError::Config(
                "result_limit must be at least 1".into(),
            ));
        }

        for (section, entries) in [
            ("body_types", &self.body_types),
            ("fuel_types", &self.fuel_types),
            ("brands", &self.brands),
        ] {
            for e in entries {
                if e.label.trim().is_empty() {
                    return Err(InterpreterError::Config(format!(
                        "{section}: entry with empty label"
                    )));
                }
                check_keywords(section, &e.keywords)?;
            }
        }

        for rule in &self.features {
            check_keywords("features", &rule.keywords)?;
            if rule.tags.is_empty() {
                return Err(InterpreterError::Config(
                    "features: rule without tags".into(),
                ));
            }
        }

        for rule in &self.budget_keywords {
            check_keywords("budget_keywords", &rule.keywords)?;
            if rule.min.is_none() && rule.max.is_none() {
                return Err(InterpreterError::Config(
                    "budget_keywords: rule without min or max".into(),
                ));
            }
        }

        Ok(())
    }

    /// Lowercase and trim every keyword so matching can compare directly
    /// against lowercased query text.
    pub fn normalized(mut self) -> Self {
        let norm = |keywords: &mut Vec<String>| {
            for k in keywords.iter_mut() {
                *k = k.trim().to_lowercase();
            }
        };
        for e in self
            .body_types
            .iter_mut()
            .chain(self.fuel_types.iter_mut())
            .chain(self.brands.iter_mut())
        {
            norm(&mut e.keywords);
        }
        for rule in &mut self.features {
            norm(&mut rule.keywords);
        }
        for rule in &mut self.budget_keywords {
            norm(&mut rule.keywords);
        }
        self
    }
}

fn check_keywords(section: &str, keywords: &[String]) -> InterpreterResult<()> {
    if keywords.is_empty() {
        return Err(InterpreterError::Config(format!(
            "{section}: entry without keywords"
        )));
    }
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(InterpreterError::Config(format!(
            "{section}: empty keyword"
        )));
    }
    Ok(())
}
