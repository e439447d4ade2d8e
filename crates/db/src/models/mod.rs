//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row and a validated DTO used for inserts and replacements.

pub mod livro;
