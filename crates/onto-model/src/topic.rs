//! Topics, topic statuses, and topic overviews.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a topic.
///
/// The server owns the status vocabulary; statuses this client does not know
/// about are preserved in [`TopicStatus::Other`] so they can still be
/// displayed (as a neutral badge carrying the raw value) and echoed back in
/// query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    Draft,
    Active,
    Deprecated,
    Merged,
    #[serde(untagged)]
    Other(String),
}

impl TopicStatus {
    /// The wire representation of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Deprecated => "deprecated",
            Self::Merged => "merged",
            Self::Other(raw) => raw,
        }
    }

    /// The four statuses the catalog defines, in filter-menu order.
    pub const KNOWN: [TopicStatus; 4] = [
        TopicStatus::Active,
        TopicStatus::Draft,
        TopicStatus::Deprecated,
        TopicStatus::Merged,
    ];
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node within a taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub taxonomy_id: String,
    #[serde(default)]
    pub taxonomy_identifier: Option<String>,
    /// Human-assigned identifier, e.g. `tx:topic-1`.
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TopicStatus,
    /// Materialized path within the taxonomy, e.g. `/tx:topic-1`.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// External reference links keyed by source system.
    #[serde(default)]
    pub external_refs: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A lightweight reference to a related topic, not a full [`Topic`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRelationshipRef {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub status: TopicStatus,
}

/// A topic enriched with its immediate relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicOverview {
    pub topic: Topic,
    #[serde(default)]
    pub child_count: usize,
    #[serde(default)]
    pub children: Vec<TopicRelationshipRef>,
    #[serde(default)]
    pub parents: Vec<TopicRelationshipRef>,
}

impl TopicOverview {
    /// Title of the first parent, if the topic has any parents.
    pub fn first_parent_title(&self) -> Option<&str> {
        self.parents.first().map(|parent| parent.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_roundtrips() {
        let status: TopicStatus = serde_json::from_str("\"draft\"").unwrap();
        assert_eq!(status, TopicStatus::Draft);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"draft\"");
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status: TopicStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, TopicStatus::Other("archived".to_string()));
        assert_eq!(status.as_str(), "archived");
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"archived\"");
    }

    #[test]
    fn overview_deserializes_fixture_shape() {
        let json = r#"{
            "topic": {
                "id": "10000000-0000-0000-0000-000000000001",
                "taxonomy_id": "00000000-0000-0000-0889-42373c0947bc",
                "taxonomy_identifier": "tx:taxonomy-one",
                "identifier": "tx:topic-1",
                "title": "Topic number one",
                "slug": "tx-topic-1",
                "description": "Description text from topic one",
                "status": "active",
                "path": "/tx:topic-1",
                "aliases": [],
                "external_refs": {},
                "created_at": "2025-06-28T00:00:00+00:00",
                "updated_at": "2025-07-28T00:00:00+00:00"
            },
            "child_count": 2,
            "children": [
                {"id": "c1", "identifier": "tx:topic-19", "title": "topic 19", "status": "draft"},
                {"id": "c2", "identifier": "tx:topic-20", "title": "topic 20", "status": "active"}
            ],
            "parents": []
        }"#;
        let overview: TopicOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.topic.status, TopicStatus::Active);
        assert_eq!(overview.child_count, 2);
        assert_eq!(overview.children.len(), 2);
        assert_eq!(overview.first_parent_title(), None);
    }

    #[test]
    fn first_parent_title_picks_first() {
        let json = r#"{
            "topic": {
                "id": "t2",
                "taxonomy_id": "x",
                "identifier": "tx:topic-2",
                "title": "Topic number two",
                "status": "active"
            },
            "child_count": 0,
            "children": [],
            "parents": [
                {"id": "p1", "identifier": "tx:topic-17", "title": "Topic 17", "status": "active"},
                {"id": "p2", "identifier": "tx:topic-18", "title": "Topic 18", "status": "draft"}
            ]
        }"#;
        let overview: TopicOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.first_parent_title(), Some("Topic 17"));
    }
}
