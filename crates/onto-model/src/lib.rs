//! Wire data model for the ontology catalog API.
//!
//! This crate mirrors the JSON shapes served by the catalog's read-only HTTP
//! API:
//!
//! - [`taxonomy`]: taxonomy records and their list envelope
//! - [`topic`]: topics, topic statuses, and topic overviews with
//!   parent/child relationship references
//! - [`query`]: typed query parameters for list endpoints and their
//!   conversion to URL query pairs
//!
//! Types deserialize leniently: fields the server may omit (or that older
//! server generations did not emit) are optional or defaulted, and unknown
//! topic statuses are preserved verbatim rather than rejected.

pub mod query;
pub mod taxonomy;
pub mod topic;

pub use query::{SortKey, SortOrder, TaxonomyQuery, TopicQuery};
pub use taxonomy::Taxonomy;
pub use topic::{Topic, TopicOverview, TopicRelationshipRef, TopicStatus};

use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by every list endpoint.
///
/// `total` is the count of matching records across all pages; `items` holds
/// only the requested window. Both are owned by the server and never
/// recomputed client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_roundtrips() {
        let json = r#"{"items":["a","b"],"total":12,"limit":2,"offset":4}"#;
        let page: Page<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items, vec!["a", "b"]);
        assert_eq!(page.total, 12);
        assert_eq!(page.limit, 2);
        assert_eq!(page.offset, 4);
    }
}
