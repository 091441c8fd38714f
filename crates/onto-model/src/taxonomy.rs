//! Taxonomy records.

use serde::{Deserialize, Serialize};

/// A named classification scheme containing topics.
///
/// Immutable from the client's perspective: fetched as a list and never
/// mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Server-assigned identifier, opaque to the client.
    pub id: String,
    /// Human-assigned identifier, e.g. `tx:taxonomy-one`.
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// SKOS concept-scheme URI, when the taxonomy was imported from SKOS.
    #[serde(default)]
    pub skos_uri: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
