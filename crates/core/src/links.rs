//! Navigational links embedded in livro responses.
//!
//! Links are plain string templates over the public base URL; nothing here
//! inspects the router.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Route prefix of the livros resource.
pub const LIVROS_PATH: &str = "/livros";

/// Relation name of a link pointing at the resource itself.
pub const REL_SELF: &str = "self";

/// Relation name of a link pointing back at the livros listing.
pub const REL_LIVROS: &str = "livros";

/// A `{ "rel": ..., "href": ... }` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// Link to the single-item endpoint of livro `id`.
pub fn livro_self_link(base_url: &str, id: DbId) -> Link {
    Link {
        rel: REL_SELF.to_string(),
        href: format!("{}{LIVROS_PATH}/{id}", trim_base(base_url)),
    }
}

/// Link to the first page of the livros listing.
pub fn livros_collection_link(base_url: &str) -> Link {
    Link {
        rel: REL_LIVROS.to_string(),
        href: format!("{}{LIVROS_PATH}?pageNumber=0", trim_base(base_url)),
    }
}

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_link_points_at_item() {
        let link = livro_self_link("http://localhost:3000", 7);
        assert_eq!(link.rel, "self");
        assert_eq!(link.href, "http://localhost:3000/livros/7");
    }

    #[test]
    fn collection_link_points_at_first_page() {
        let link = livros_collection_link("https://api.example.com/");
        assert_eq!(link.rel, "livros");
        assert_eq!(link.href, "https://api.example.com/livros?pageNumber=0");
    }
}
