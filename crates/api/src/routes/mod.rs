pub mod health;
pub mod livro;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /livros                                          list, create
/// /livros/{id}                                     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/livros", livro::router())
}
