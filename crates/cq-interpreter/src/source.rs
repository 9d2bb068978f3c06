//! Candidate source abstraction: where the car snapshot comes from.

use async_trait::async_trait;

use cq_protocol::car::Car;

use crate::error::{InterpreterError, InterpreterResult};

/// Abstraction over the listing store that supplies candidates.
///
/// The interpreter only ever sees the loaded snapshot; fetching, caching
/// and paging belong to implementations of this trait.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Load the full current listing.
    async fn load(&self) -> InterpreterResult<Vec<Car>>;

    /// Short description for logs (path, backend name).
    fn describe(&self) -> String;
}

/// Reads a JSON array of cars from the local filesystem.
pub struct FileCandidateSource {
    path: String,
}

impl FileCandidateSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CandidateSource for FileCandidateSource {
    async fn load(&self) -> InterpreterResult<Vec<Car>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InterpreterError::NotFound(self.path.clone())
            } else {
                InterpreterError::Io(format!("{}: {e}", self.path))
            }
        })?;
        let cars: Vec<Car> = serde_json::from_str(&content)
            .map_err(|e| InterpreterError::Decode(format!("{}: {e}", self.path)))?;
        tracing::debug!(path = %self.path, count = cars.len(), "candidates loaded");
        Ok(cars)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path)
    }
}
