//! Typed query parameters for the list endpoints.
//!
//! Each query type converts itself into URL query pairs with
//! `to_pairs`. Unset optional fields are omitted entirely: the server treats
//! an absent parameter as "no filter", and an explicit empty string could be
//! misread as "match the empty string".

use serde::{Deserialize, Serialize};

use crate::topic::TopicStatus;

/// Column the topic list is sorted by. The server defines tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Title,
    Status,
    ChildCount,
    CreatedAt,
    UpdatedAt,
}

impl SortKey {
    /// The wire representation of this sort key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Status => "status",
            Self::ChildCount => "child_count",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Query parameters for `GET /taxonomies`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TaxonomyQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl TaxonomyQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

/// Query parameters for `GET /taxonomies/{taxonomy_id}/topics`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicQuery {
    pub limit: usize,
    pub offset: usize,
    pub status: Option<TopicStatus>,
    pub search: Option<String>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for TopicQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
            status: None,
            search: None,
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl TopicQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(status) = &self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(search) = &self.search
            && !search.is_empty()
        {
            pairs.push(("search", search.clone()));
        }
        pairs.push(("sort_by", self.sort_by.as_str().to_string()));
        pairs.push(("sort_order", self.sort_order.as_str().to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_filters_are_omitted() {
        let query = TopicQuery::default();
        let pairs = query.to_pairs();
        assert!(pairs.iter().all(|(key, _)| *key != "status"));
        assert!(pairs.iter().all(|(key, _)| *key != "search"));
        assert!(pairs.contains(&("limit", "10".to_string())));
        assert!(pairs.contains(&("offset", "0".to_string())));
        assert!(pairs.contains(&("sort_by", "title".to_string())));
        assert!(pairs.contains(&("sort_order", "asc".to_string())));
    }

    #[test]
    fn empty_search_is_omitted() {
        let query = TopicQuery {
            search: Some(String::new()),
            ..TopicQuery::default()
        };
        assert!(query.to_pairs().iter().all(|(key, _)| *key != "search"));
    }

    #[test]
    fn set_filters_are_sent() {
        let query = TopicQuery {
            limit: 20,
            offset: 40,
            status: Some(TopicStatus::Draft),
            search: Some("data".to_string()),
            sort_by: SortKey::ChildCount,
            sort_order: SortOrder::Desc,
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("status", "draft".to_string())));
        assert!(pairs.contains(&("search", "data".to_string())));
        assert!(pairs.contains(&("sort_by", "child_count".to_string())));
        assert!(pairs.contains(&("sort_order", "desc".to_string())));
    }

    #[test]
    fn taxonomy_query_defaults_to_no_pairs() {
        assert!(TaxonomyQuery::default().to_pairs().is_empty());
        let query = TaxonomyQuery {
            limit: Some(50),
            offset: Some(0),
        };
        assert_eq!(
            query.to_pairs(),
            vec![("limit", "50".to_string()), ("offset", "0".to_string())]
        );
    }

    #[test]
    fn sort_order_toggles() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }
}
