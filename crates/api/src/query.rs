//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /livros` (`?pageNumber=`).
///
/// The page number is zero-based and defaults to 0. The page size is fixed.
#[derive(Debug, Default, Deserialize)]
pub struct ListLivrosParams {
    #[serde(rename = "pageNumber")]
    pub page_number: Option<i64>,
}
