//! Application-level state.

use std::fmt;

use iced::widget::combo_box;

use onto_api::{ApiClient, QueryCache, QuerySlot, TopicsKey};
use onto_model::{Page, Taxonomy, TaxonomyQuery, TopicOverview};

use crate::settings::Settings;
use crate::state::BrowserState;

/// Entry in the searchable taxonomy selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyChoice {
    pub id: String,
    pub title: String,
}

impl fmt::Display for TaxonomyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Top-level application state.
///
/// The caches are explicit services constructed here and passed down through
/// `&mut AppState`; there is no global query cache.
pub struct AppState {
    /// API client shared by all fetches.
    pub client: ApiClient,
    /// Persisted user preferences.
    pub settings: Settings,
    /// Query state controller for the browser page.
    pub browser: BrowserState,
    /// Fetch-state cache for the taxonomy list.
    pub taxonomies: QueryCache<TaxonomyQuery, Page<Taxonomy>>,
    /// Fetch-state cache for topic pages.
    pub topics: QueryCache<TopicsKey, Page<TopicOverview>>,
    /// Widget state for the searchable taxonomy selector.
    pub taxonomy_choices: combo_box::State<TaxonomyChoice>,
    /// Selector entry mirroring `browser.selected_taxonomy`.
    pub selected_choice: Option<TaxonomyChoice>,
}

impl AppState {
    pub fn new(client: ApiClient, settings: Settings) -> Self {
        Self {
            client,
            settings,
            browser: BrowserState::default(),
            taxonomies: QueryCache::new(),
            topics: QueryCache::new(),
            taxonomy_choices: combo_box::State::new(Vec::new()),
            selected_choice: None,
        }
    }

    /// Cache key of the taxonomy list (the selector always shows the
    /// unfiltered list).
    pub fn taxonomies_key() -> TaxonomyQuery {
        TaxonomyQuery::default()
    }

    /// Cache key of the topic page the table currently wants, once a
    /// taxonomy is selected.
    pub fn topics_key(&self) -> Option<TopicsKey> {
        self.browser
            .selected_taxonomy
            .clone()
            .map(|taxonomy_id| TopicsKey {
                taxonomy_id,
                query: self.browser.topic_query(),
            })
    }

    /// Slot backing the taxonomy selector.
    pub fn taxonomies_slot(&self) -> QuerySlot<'_, Page<Taxonomy>> {
        self.taxonomies.slot(&Self::taxonomies_key())
    }

    /// Slot backing the topics table for the current key.
    pub fn topics_slot(&self) -> QuerySlot<'_, Page<TopicOverview>> {
        match self.topics_key() {
            Some(key) => self.topics.slot(&key),
            None => QuerySlot::default(),
        }
    }

    /// Overview of the selected topic, if it is on the currently loaded
    /// page. Selection is not validated against the full result set.
    pub fn selected_topic(&self) -> Option<&TopicOverview> {
        let selected = self.browser.selected_topic.as_deref()?;
        let page = self.topics_slot().data?;
        page.items.iter().find(|record| record.topic.id == selected)
    }

    /// Rebuild the selector choices from the taxonomy slot after a
    /// response lands.
    pub fn rebuild_taxonomy_choices(&mut self) {
        let choices: Vec<TaxonomyChoice> = self
            .taxonomies_slot()
            .data
            .map(|page| {
                page.items
                    .iter()
                    .map(|taxonomy| TaxonomyChoice {
                        id: taxonomy.id.clone(),
                        title: taxonomy.title.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        self.taxonomy_choices = combo_box::State::new(choices);
    }
}
