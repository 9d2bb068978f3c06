//! Test-only crate. See `tests/` for end-to-end scenarios driving the chat
//! API router over the real interpreter.
