//! Handlers for the `/livros` resource.
//!
//! A livro missing on read answers 404. A livro missing on update or delete
//! answers with [`ServerConfig::missing_livro_status`](crate::config::ServerConfig::missing_livro_status),
//! 400 unless `UNIFY_NOT_FOUND` is set. All three carry an empty body.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use livros_core::links::{livro_self_link, livros_collection_link};
use livros_core::livro::{LivroRequest, LIVRO_PAGE_SIZE};
use livros_core::page::{Page, PageRequest};
use livros_core::types::DbId;
use livros_db::models::livro::Livro;

use crate::error::AppResult;
use crate::mapper::{livro_to_response, request_to_livro, LivroResponse};
use crate::query::ListLivrosParams;
use crate::state::AppState;

/// POST /livros
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<LivroRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Livro>)> {
    let Json(request) = payload?;
    let input = request_to_livro(request)?;

    let livro = state.store.create(&input).await?;

    tracing::info!(livro_id = livro.id, title = %livro.title, "Livro created");

    Ok((StatusCode::CREATED, Json(livro)))
}

/// GET /livros?pageNumber=N
///
/// Pages hold [`LIVRO_PAGE_SIZE`] livros sorted by title. Each entry links to
/// itself.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListLivrosParams>, QueryRejection>,
) -> AppResult<Json<Page<LivroResponse>>> {
    let Query(params) = params?;
    let request = PageRequest::new(params.page_number.unwrap_or(0), LIVRO_PAGE_SIZE)?;

    let page = state.store.find_page(request).await?;

    let base_url = state.config.public_base_url.as_str();
    Ok(Json(page.map(|livro| {
        let link = livro_self_link(base_url, livro.id);
        livro_to_response(livro, link)
    })))
}

/// GET /livros/{id}
///
/// The response links back to the first page of the listing.
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Response> {
    let Path(id) = path?;

    let Some(livro) = state.store.find_by_id(id).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let link = livros_collection_link(&state.config.public_base_url);
    Ok(Json(livro_to_response(livro, link)).into_response())
}

/// PUT /livros/{id}
///
/// Replaces every field; the identifier always comes from the path.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<LivroRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Path(id) = path?;
    let Json(request) = payload?;

    if state.store.find_by_id(id).await?.is_none() {
        tracing::debug!(livro_id = id, "Update target not found");
        return Ok(state.config.missing_livro_status().into_response());
    }

    let input = request_to_livro(request)?;

    match state.store.update(id, &input).await? {
        Some(livro) => {
            tracing::info!(livro_id = livro.id, "Livro updated");
            Ok((StatusCode::CREATED, Json(livro)).into_response())
        }
        // Deleted between the existence check and the write.
        None => Ok(state.config.missing_livro_status().into_response()),
    }
}

/// DELETE /livros/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;

    if state.store.delete_by_id(id).await? {
        tracing::info!(livro_id = id, "Livro deleted");
        Ok(StatusCode::OK)
    } else {
        tracing::debug!(livro_id = id, "Delete target not found");
        Ok(state.config.missing_livro_status())
    }
}
