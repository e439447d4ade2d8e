//! Repository for the `livros` table.

use livros_core::page::{Page, PageRequest};
use livros_core::types::DbId;
use sqlx::PgPool;

use crate::models::livro::{Livro, NewLivro};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, price, category, isbn";

/// Provides CRUD operations for livros.
pub struct LivroRepo;

impl LivroRepo {
    /// Insert a new livro, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewLivro) -> Result<Livro, sqlx::Error> {
        let query = format!(
            "INSERT INTO livros (title, author, price, category, isbn)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Livro>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.price)
            .bind(input.category.as_str())
            .bind(&input.isbn)
            .fetch_one(pool)
            .await
    }

    /// Find a livro by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Livro>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM livros WHERE id = $1");
        sqlx::query_as::<_, Livro>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of livros ordered by title (byte order), then id.
    pub async fn find_page(pool: &PgPool, request: PageRequest) -> Result<Page<Livro>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM livros ORDER BY title COLLATE \"C\" ASC, id ASC LIMIT $1 OFFSET $2"
        );
        let content = sqlx::query_as::<_, Livro>(&query)
            .bind(request.size)
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM livros")
            .fetch_one(pool)
            .await?;

        Ok(Page::new(content, request, total))
    }

    /// Replace every field of a livro, keeping its ID.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewLivro,
    ) -> Result<Option<Livro>, sqlx::Error> {
        let query = format!(
            "UPDATE livros SET
                title = $2,
                author = $3,
                price = $4,
                category = $5,
                isbn = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Livro>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.price)
            .bind(input.category.as_str())
            .bind(&input.isbn)
            .fetch_optional(pool)
            .await
    }

    /// Delete a livro by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM livros WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
