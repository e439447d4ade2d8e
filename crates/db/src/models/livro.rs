//! Livro entity model and DTOs.

use livros_core::livro::Category;
use livros_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A livro row from the `livros` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Livro {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub price: i32,
    #[sqlx(try_from = "String")]
    pub category: Category,
    pub isbn: Option<String>,
}

/// DTO for inserting or fully replacing a livro. Fields are already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLivro {
    pub title: String,
    pub author: String,
    pub price: i32,
    pub category: Category,
    pub isbn: Option<String>,
}

impl NewLivro {
    /// Attach a store-assigned identifier.
    pub fn into_livro(self, id: DbId) -> Livro {
        Livro {
            id,
            title: self.title,
            author: self.author,
            price: self.price,
            category: self.category,
            isbn: self.isbn,
        }
    }
}
