//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the record store in [`AppState`](crate::state::AppState)
//! and map errors via [`AppError`](crate::error::AppError).

pub mod livro;
