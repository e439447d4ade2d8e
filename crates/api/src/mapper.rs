//! Conversions between wire shapes and the persisted livro entity.

use livros_core::error::CoreError;
use livros_core::links::Link;
use livros_core::livro::{validate_livro, Category, LivroRequest};
use livros_core::types::DbId;
use livros_db::models::livro::{Livro, NewLivro};
use serde::Serialize;

/// A livro as returned by the read endpoints, carrying one navigational link.
#[derive(Debug, Clone, Serialize)]
pub struct LivroResponse {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub price: i32,
    pub category: Category,
    pub isbn: Option<String>,
    pub link: Link,
}

/// Validate a submission and copy its fields into an insertable livro.
///
/// The identifier is never taken from the submission.
pub fn request_to_livro(request: LivroRequest) -> Result<NewLivro, CoreError> {
    validate_livro(&request).map_err(CoreError::InvalidFields)?;

    let price = request.price.and_then(|p| i32::try_from(p).ok());
    let category = request.category.as_deref().map(str::parse::<Category>);

    match (request.title, request.author, price, category) {
        (Some(title), Some(author), Some(price), Some(Ok(category))) => Ok(NewLivro {
            title,
            author,
            price,
            category,
            isbn: request.isbn,
        }),
        _ => Err(CoreError::Internal(
            "validated livro submission is missing fields".to_string(),
        )),
    }
}

/// Copy a livro into its response shape with the given link.
pub fn livro_to_response(livro: Livro, link: Link) -> LivroResponse {
    LivroResponse {
        id: livro.id,
        title: livro.title,
        author: livro.author,
        price: livro.price,
        category: livro.category,
        isbn: livro.isbn,
        link,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use livros_core::links::livro_self_link;

    use super::*;

    fn clean_code() -> LivroRequest {
        LivroRequest {
            title: Some("Clean Code".into()),
            author: Some("Robert Martin".into()),
            price: Some(45),
            category: Some("TECH".into()),
            isbn: Some("9701234567".into()),
        }
    }

    #[test]
    fn valid_request_copies_fields() {
        let livro = request_to_livro(clean_code()).unwrap();
        assert_eq!(
            livro,
            NewLivro {
                title: "Clean Code".into(),
                author: "Robert Martin".into(),
                price: 45,
                category: Category::Tech,
                isbn: Some("9701234567".into()),
            }
        );
    }

    #[test]
    fn invalid_request_yields_field_violations() {
        let request = LivroRequest {
            price: Some(0),
            ..clean_code()
        };
        assert_matches!(
            request_to_livro(request),
            Err(CoreError::InvalidFields(v)) if v.len() == 1 && v[0].field == "price"
        );
    }

    #[test]
    fn response_carries_all_fields_and_link() {
        let livro = request_to_livro(clean_code()).unwrap().into_livro(3);
        let response = livro_to_response(livro, livro_self_link("http://h", 3));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "Clean Code");
        assert_eq!(json["category"], "TECH");
        assert_eq!(json["isbn"], "9701234567");
        assert_eq!(json["link"]["rel"], "self");
        assert_eq!(json["link"]["href"], "http://h/livros/3");
    }
}
