//! Browser page message handling and fetch orchestration.
//!
//! User intents mutate [`crate::state::BrowserState`] through its pure
//! transitions, then re-derive the current cache key and consult the query
//! caches: a key with fresh data spawns nothing, a key already in flight
//! coalesces, anything else spawns one fetch task. Completions are routed
//! back here addressed by their key, so a late response can only ever update
//! its own slot.

use iced::Task;
use tracing::debug;

use onto_api::{ApiError, Completion, TopicsKey};
use onto_model::{Page, Taxonomy, TaxonomyQuery, TopicOverview};

use crate::message::{BrowserMessage, Message};
use crate::service;
use crate::state::AppState;

use super::MessageHandler;

/// Handler for [`BrowserMessage`].
pub struct BrowserHandler;

impl MessageHandler<BrowserMessage> for BrowserHandler {
    fn handle(&self, state: &mut AppState, msg: BrowserMessage) -> Task<Message> {
        match msg {
            BrowserMessage::TaxonomySelected(choice) => {
                debug!(taxonomy = %choice.id, "taxonomy selected");
                state.browser.select_taxonomy(choice.id.clone());
                state.selected_choice = Some(choice);
                ensure_topics(state)
            }
            BrowserMessage::SearchChanged(value) => {
                state.browser.set_search(value);
                ensure_topics(state)
            }
            BrowserMessage::SearchCleared => {
                state.browser.set_search(String::new());
                ensure_topics(state)
            }
            BrowserMessage::StatusFilterChanged(status) => {
                state.browser.set_status(Some(status));
                ensure_topics(state)
            }
            BrowserMessage::StatusFilterCleared => {
                state.browser.set_status(None);
                ensure_topics(state)
            }
            BrowserMessage::SortClicked(column) => {
                state.browser.toggle_sort(column);
                ensure_topics(state)
            }
            BrowserMessage::PageChanged(page) => {
                state.browser.set_page(page);
                ensure_topics(state)
            }
            BrowserMessage::PageSizeChanged(size) => {
                state.browser.set_page_size(size);
                ensure_topics(state)
            }
            BrowserMessage::TopicSelected(topic_id) => {
                state.browser.select_topic(topic_id);
                Task::none()
            }
            BrowserMessage::RetryTopics => {
                if let Some(key) = state.topics_key() {
                    state.topics.invalidate(&key);
                }
                ensure_topics(state)
            }
            BrowserMessage::RetryTaxonomies => {
                state.taxonomies.invalidate(&AppState::taxonomies_key());
                ensure_taxonomies(state)
            }
        }
    }
}

/// Fetch the taxonomy list unless the cache already has a fresh copy or a
/// request is in flight.
pub fn ensure_taxonomies(state: &mut AppState) -> Task<Message> {
    let key = AppState::taxonomies_key();
    if state.taxonomies.begin(key.clone()) {
        service::load_taxonomies(state.client.clone(), key)
    } else {
        Task::none()
    }
}

/// Fetch the topic page for the current key; a no-op until a taxonomy is
/// chosen, so no request fires on startup.
pub fn ensure_topics(state: &mut AppState) -> Task<Message> {
    let Some(key) = state.topics_key() else {
        return Task::none();
    };
    if state.topics.begin(key.clone()) {
        service::load_topics(state.client.clone(), key)
    } else {
        Task::none()
    }
}

/// Route a taxonomy list response into its key's slot.
pub fn taxonomies_loaded(
    state: &mut AppState,
    key: TaxonomyQuery,
    result: Result<Page<Taxonomy>, ApiError>,
) -> Task<Message> {
    match state.taxonomies.complete(&key, result) {
        Completion::Retry => service::load_taxonomies(state.client.clone(), key),
        Completion::Settled => {
            state.rebuild_taxonomy_choices();
            Task::none()
        }
    }
}

/// Route a topic page response into its key's slot.
pub fn topics_loaded(
    state: &mut AppState,
    key: TopicsKey,
    result: Result<Page<TopicOverview>, ApiError>,
) -> Task<Message> {
    match state.topics.complete(&key, result) {
        Completion::Retry => service::load_topics(state.client.clone(), key),
        Completion::Settled => Task::none(),
    }
}
