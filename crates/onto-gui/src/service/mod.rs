//! Async fetch services.
//!
//! These bridge the API client to Iced's `Task::perform` pattern: each
//! function spawns one request and routes the completion back into `update`
//! as a message carrying the cache key the result belongs to.

use iced::Task;

use onto_api::{ApiClient, TopicsKey};
use onto_model::TaxonomyQuery;

use crate::message::Message;

/// Fetch the taxonomy list for `key`.
pub fn load_taxonomies(client: ApiClient, key: TaxonomyQuery) -> Task<Message> {
    Task::perform(
        {
            let key = key.clone();
            async move { client.list_taxonomies(&key).await }
        },
        move |result| Message::TaxonomiesLoaded(key.clone(), result),
    )
}

/// Fetch one taxonomy's topic page for `key`.
pub fn load_topics(client: ApiClient, key: TopicsKey) -> Task<Message> {
    Task::perform(
        {
            let key = key.clone();
            async move {
                client
                    .list_taxonomy_topics(&key.taxonomy_id, &key.query)
                    .await
            }
        },
        move |result| Message::TopicsLoaded(key.clone(), result),
    )
}
