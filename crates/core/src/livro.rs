//! Livro (book) constants, category enum, submission shape and validation.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::{
    check_length, check_not_blank, check_pattern, check_range, check_required, FieldViolation,
    RULE_ENUM_VALUES,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 254;

pub const AUTHOR_MIN_LEN: usize = 3;
pub const AUTHOR_MAX_LEN: usize = 154;

pub const PRICE_MIN: i64 = 1;
pub const PRICE_MAX: i64 = 99;

/// ISBN: `970` followed by either ten or seven ASCII digits.
pub const ISBN_PATTERN: &str = r"^970(?:[0-9]{10}|[0-9]{7})$";

/// Number of livros returned per page by the list endpoint.
pub const LIVRO_PAGE_SIZE: i64 = 2;

static ISBN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ISBN_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Fixed set of book categories. Stored and serialized as the upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Romance,
    Ficcao,
    Tech,
    Historia,
    Biografia,
    Infantil,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Romance,
        Category::Ficcao,
        Category::Tech,
        Category::Historia,
        Category::Biografia,
        Category::Infantil,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Romance => "ROMANCE",
            Category::Ficcao => "FICCAO",
            Category::Tech => "TECH",
            Category::Historia => "HISTORIA",
            Category::Biografia => "BIOGRAFIA",
            Category::Infantil => "INFANTIL",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the [`Category`] names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Book submission as received on create and update.
///
/// Every field is optional at the wire level so that missing or mistyped
/// values surface as field violations instead of body parse failures.
/// The Portuguese field names are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LivroRequest {
    #[serde(alias = "titulo")]
    pub title: Option<String>,
    #[serde(alias = "autor")]
    pub author: Option<String>,
    #[serde(alias = "preco")]
    pub price: Option<i64>,
    #[serde(alias = "categoria")]
    pub category: Option<String>,
    pub isbn: Option<String>,
}

/// Check a submission against every field rule.
///
/// Returns all violations, not just the first one.
pub fn validate_livro(request: &LivroRequest) -> Result<(), Vec<FieldViolation>> {
    let title = request.title.as_deref();
    let author = request.author.as_deref();

    let mut violations: Vec<FieldViolation> = [
        check_not_blank("title", title),
        check_length("title", title, TITLE_MIN_LEN, TITLE_MAX_LEN),
        check_not_blank("author", author),
        check_length("author", author, AUTHOR_MIN_LEN, AUTHOR_MAX_LEN),
        check_range("price", request.price, PRICE_MIN, PRICE_MAX),
        check_pattern("isbn", request.isbn.as_deref(), &ISBN_RE),
    ]
    .into_iter()
    .flatten()
    .collect();

    if let Some(v) = check_category(request.category.as_deref()) {
        violations.push(v);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_category(value: Option<&str>) -> Option<FieldViolation> {
    if let Some(v) = check_required("category", value.as_ref()) {
        return Some(v);
    }
    let raw = value?;
    match raw.parse::<Category>() {
        Ok(_) => None,
        Err(_) => {
            let valid: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
            Some(FieldViolation::new(
                "category",
                RULE_ENUM_VALUES,
                format!("category must be one of: {}", valid.join(", ")),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
