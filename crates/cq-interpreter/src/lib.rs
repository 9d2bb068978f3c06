//! Natural-language car query interpreter.
//!
//! Turns chatbot text ("sporty petrol suv under 20 lakhs") into a
//! `QueryPreferences` record with ordered, first-match-wins rule tables,
//! then filters and ranks a candidate snapshot against it. Interpretation
//! is synchronous and total: unrecognized input yields empty preferences,
//! and an empty match yields an empty list.
//!
//! Vocabularies, thresholds and the result cap live in `InterpreterConfig`
//! so they can be versioned separately from the matching rules. A
//! `CandidateSource` abstraction feeds the snapshot from files or mocks.

pub mod attributes;
pub mod budget;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod keywords;
pub mod mock;
pub mod ranking;
pub mod source;

// Re-export key types for convenience
pub use config::{
    BudgetKeywordRule, FeatureRule, InterpreterConfig, RankingThresholds, VocabularyEntry,
};
pub use error::{InterpreterError, InterpreterResult};
pub use interpreter::Interpreter;
pub use keywords::KeywordMatch;
pub use mock::MockCandidateSource;
pub use source::{CandidateSource, FileCandidateSource};
