//! Record store abstraction over livro persistence.
//!
//! Handlers only see [`LivroStore`]. [`PgLivroStore`] delegates to
//! [`LivroRepo`]; [`MemoryLivroStore`] keeps rows in a map and is used by
//! tests and by local runs without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use livros_core::page::{Page, PageRequest};
use livros_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::livro::{Livro, NewLivro};
use crate::repositories::LivroRepo;
use crate::DbPool;

/// Persistence operations the livros resource relies on.
#[async_trait]
pub trait LivroStore: Send + Sync {
    /// Persist a new livro and return it with its assigned ID.
    async fn create(&self, input: &NewLivro) -> Result<Livro, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Livro>, sqlx::Error>;

    /// One page of livros sorted by title ascending in byte order, then id.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Livro>, sqlx::Error>;

    /// Replace all fields of livro `id`. `None` if it does not exist.
    async fn update(&self, id: DbId, input: &NewLivro) -> Result<Option<Livro>, sqlx::Error>;

    /// Remove livro `id`. `false` if it did not exist.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// [`LivroStore`] backed by the `livros` table.
#[derive(Clone)]
pub struct PgLivroStore {
    pool: DbPool,
}

impl PgLivroStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LivroStore for PgLivroStore {
    async fn create(&self, input: &NewLivro) -> Result<Livro, sqlx::Error> {
        LivroRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Livro>, sqlx::Error> {
        LivroRepo::find_by_id(&self.pool, id).await
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Livro>, sqlx::Error> {
        LivroRepo::find_page(&self.pool, request).await
    }

    async fn update(&self, id: DbId, input: &NewLivro) -> Result<Option<Livro>, sqlx::Error> {
        LivroRepo::update(&self.pool, id, input).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        LivroRepo::delete(&self.pool, id).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MemoryState {
    last_id: DbId,
    rows: BTreeMap<DbId, Livro>,
}

/// [`LivroStore`] holding rows in process memory. IDs start at 1.
#[derive(Default)]
pub struct MemoryLivroStore {
    state: RwLock<MemoryState>,
}

impl MemoryLivroStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LivroStore for MemoryLivroStore {
    async fn create(&self, input: &NewLivro) -> Result<Livro, sqlx::Error> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let livro = input.clone().into_livro(state.last_id);
        state.rows.insert(livro.id, livro.clone());
        tracing::debug!(livro_id = livro.id, "Inserted livro into memory store");
        Ok(livro)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Livro>, sqlx::Error> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Livro>, sqlx::Error> {
        let state = self.state.read().await;

        let mut sorted: Vec<&Livro> = state.rows.values().collect();
        sorted.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let content = sorted.into_iter().skip(offset).take(size).cloned().collect();

        Ok(Page::new(content, request, state.rows.len() as i64))
    }

    async fn update(&self, id: DbId, input: &NewLivro) -> Result<Option<Livro>, sqlx::Error> {
        let mut state = self.state.write().await;
        match state.rows.get_mut(&id) {
            Some(row) => {
                *row = input.clone().into_livro(id);
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use livros_core::livro::Category;

    use super::*;

    fn new_livro(title: &str) -> NewLivro {
        NewLivro {
            title: title.to_string(),
            author: "Some Author".to_string(),
            price: 10,
            category: Category::Tech,
            isbn: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = MemoryLivroStore::new();
        let a = store.create(&new_livro("Alpha")).await.unwrap();
        let b = store.create(&new_livro("Beta")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(b.title, "Beta");
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryLivroStore::new();
        let a = store.create(&new_livro("Alpha")).await.unwrap();
        assert!(store.delete_by_id(a.id).await.unwrap());
        let b = store.create(&new_livro("Beta")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn find_by_id_misses_unknown_id() {
        let store = MemoryLivroStore::new();
        assert!(store.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let store = MemoryLivroStore::new();
        let created = store.create(&new_livro("Alpha")).await.unwrap();

        let replacement = NewLivro {
            price: 99,
            category: Category::Romance,
            isbn: Some("9701234567".into()),
            ..new_livro("Omega")
        };
        let updated = store
            .update(created.id, &replacement)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated, replacement.into_livro(created.id));
        assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_unknown_id_creates_nothing() {
        let store = MemoryLivroStore::new();
        assert!(store.update(5, &new_livro("Ghost")).await.unwrap().is_none());
        let page = store.find_page(PageRequest::new(0, 2).unwrap()).await.unwrap();
        assert_eq!(page.total_elements, 0);
    }

    #[tokio::test]
    async fn delete_unknown_id_returns_false() {
        let store = MemoryLivroStore::new();
        assert!(!store.delete_by_id(1).await.unwrap());
    }

    #[tokio::test]
    async fn pages_are_sorted_by_title() {
        let store = MemoryLivroStore::new();
        for title in ["Gamma", "Alpha", "Beta"] {
            store.create(&new_livro(title)).await.unwrap();
        }

        let first = store.find_page(PageRequest::new(0, 2).unwrap()).await.unwrap();
        let titles: Vec<&str> = first.content.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta"]);
        assert_eq!(first.total_elements, 3);
        assert_eq!(first.total_pages, 2);

        let second = store.find_page(PageRequest::new(1, 2).unwrap()).await.unwrap();
        let titles: Vec<&str> = second.content.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Gamma"]);
        assert!(second.last);
    }

    #[tokio::test]
    async fn upper_case_titles_sort_before_lower_case() {
        let store = MemoryLivroStore::new();
        for title in ["alpha", "Beta", "Zeta"] {
            store.create(&new_livro(title)).await.unwrap();
        }
        let page = store.find_page(PageRequest::new(0, 3).unwrap()).await.unwrap();
        let titles: Vec<&str> = page.content.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Beta", "Zeta", "alpha"]);
    }

    #[tokio::test]
    async fn equal_titles_ordered_by_id() {
        let store = MemoryLivroStore::new();
        let a = store.create(&new_livro("Same")).await.unwrap();
        let b = store.create(&new_livro("Same")).await.unwrap();
        let page = store.find_page(PageRequest::new(0, 2).unwrap()).await.unwrap();
        let ids: Vec<DbId> = page.content.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }
}
