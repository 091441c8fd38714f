//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and fetch completions flow through these types;
//! the `update` function processes them to modify application state.

use iced::keyboard;

use onto_api::{ApiError, TopicsKey};
use onto_model::{Page, SortKey, Taxonomy, TaxonomyQuery, TopicOverview, TopicStatus};

use crate::state::TaxonomyChoice;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Browser page messages (user intents).
    Browser(BrowserMessage),

    // =========================================================================
    // Background task results
    // =========================================================================
    /// Taxonomy list fetch completed; the key addresses the cache slot the
    /// result belongs to.
    TaxonomiesLoaded(TaxonomyQuery, Result<Page<Taxonomy>, ApiError>),

    /// Topic page fetch completed, addressed by its cache key.
    TopicsLoaded(TopicsKey, Result<Page<TopicOverview>, ApiError>),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// Toggle light/dark appearance.
    ToggleTheme,

    /// No operation - used for events the app ignores.
    Noop,
}

/// User intents on the browser page.
#[derive(Debug, Clone)]
pub enum BrowserMessage {
    /// User picked a taxonomy in the selector.
    TaxonomySelected(TaxonomyChoice),

    /// Search input changed.
    SearchChanged(String),

    /// Clear button on the search box.
    SearchCleared,

    /// Status filter picked.
    StatusFilterChanged(TopicStatus),

    /// Status filter cleared back to "all statuses".
    StatusFilterCleared,

    /// A sortable column header was clicked.
    SortClicked(SortKey),

    /// Pager moved to a page (1-based).
    PageChanged(usize),

    /// Page size selector changed.
    PageSizeChanged(usize),

    /// A table row (or its selection control) was clicked.
    TopicSelected(String),

    /// Retry the topics fetch after a settled error.
    RetryTopics,

    /// Retry the taxonomy list fetch after a settled error.
    RetryTaxonomies,
}
