//! Route definitions for the `/livros` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::livro;
use crate::state::AppState;

/// Routes mounted at `/livros`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(livro::list).post(livro::create))
        .route(
            "/{id}",
            get(livro::get_by_id)
                .put(livro::update)
                .delete(livro::delete),
        )
}
