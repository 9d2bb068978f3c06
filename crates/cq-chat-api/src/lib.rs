//! CarQuery chat API: library crate for the chatbot REST server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `cq-e2e-tests`) can access `AppState`, `build_router` and the
//! reply helpers.

pub mod config;
pub mod error;
pub mod reply;
pub mod routes;
pub mod state;
