//! Page request and page envelope for paged listings.
//!
//! The serialized [`Page`] keeps the field names existing clients already
//! read (`content`, `totalElements`, `number`, ...).

use serde::Serialize;

use crate::error::CoreError;

/// A zero-based page number plus a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: i64,
    pub size: i64,
}

impl PageRequest {
    /// Build a page request, rejecting negative page numbers and empty pages.
    pub fn new(number: i64, size: i64) -> Result<Self, CoreError> {
        if number < 0 {
            return Err(CoreError::Validation(format!(
                "pageNumber must be >= 0, got {number}"
            )));
        }
        if size < 1 {
            return Err(CoreError::Validation(format!(
                "page size must be >= 1, got {size}"
            )));
        }
        Ok(Self { number, size })
    }

    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> i64 {
        self.number.saturating_mul(self.size)
    }
}

/// One page of results plus totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number: i64,
    pub size: i64,
    pub number_of_elements: i64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        let total_pages = (total_elements + request.size - 1) / request.size;
        let number_of_elements = content.len() as i64;
        Self {
            total_pages,
            number: request.number,
            size: request.size,
            number_of_elements,
            first: request.number == 0,
            last: request.number >= total_pages.saturating_sub(1),
            empty: content.is_empty(),
            content,
            total_elements,
        }
    }

    /// Transform every item, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}
