//! Domain types and pure logic for the livros service.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on top of it.

pub mod error;
pub mod links;
pub mod livro;
pub mod page;
pub mod types;
pub mod validation;
