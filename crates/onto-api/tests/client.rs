//! Client integration tests against an in-process catalog API.
//!
//! The mock server mirrors the real catalog's behavior: server-side status
//! and search filtering, sorting, offset pagination, and FastAPI-style
//! `{detail}` error bodies.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use serde_json::{Value, json};

use onto_api::{ApiClient, ApiConfig, ApiError};
use onto_model::{SortKey, SortOrder, TopicQuery, TopicStatus};

const TAXONOMY_ONE: &str = "00000000-0000-0000-0889-42373c0947bc";

fn taxonomies() -> Value {
    json!([
        {
            "id": TAXONOMY_ONE,
            "identifier": "tx:taxonomy-one",
            "title": "Taxonomy One",
            "description": "Primary taxonomy for demonstration data.",
            "skos_uri": null,
            "created_at": "2025-04-09T00:00:00+00:00",
            "updated_at": "2025-08-02T00:00:00+00:00"
        },
        {
            "id": "00000000-0000-0000-6a71-44b413811639",
            "identifier": "tx:taxonomy-two",
            "title": "Taxonomy Two",
            "description": "Secondary taxonomy for exploration.",
            "skos_uri": null,
            "created_at": "2025-01-19T00:00:00+00:00",
            "updated_at": "2025-07-24T00:00:00+00:00"
        }
    ])
}

fn topic(
    n: u32,
    title: &str,
    status: &str,
    description: Option<&str>,
    children: Value,
    parents: Value,
    created_at: &str,
) -> Value {
    let child_count = children.as_array().map_or(0, Vec::len);
    json!({
        "topic": {
            "id": format!("10000000-0000-0000-0000-00000000000{n}"),
            "taxonomy_id": TAXONOMY_ONE,
            "taxonomy_identifier": "tx:taxonomy-one",
            "identifier": format!("tx:topic-{n}"),
            "title": title,
            "slug": format!("tx-topic-{n}"),
            "description": description,
            "status": status,
            "path": format!("/tx:topic-{n}"),
            "aliases": [],
            "external_refs": {},
            "created_at": created_at,
            "updated_at": created_at
        },
        "child_count": child_count,
        "children": children,
        "parents": parents
    })
}

/// Six topics, two of them `draft`, matching the development fixtures.
fn topics() -> Vec<Value> {
    vec![
        topic(
            1,
            "Topic number one",
            "active",
            Some("Description text from topic one"),
            json!([
                {"id": "c1", "identifier": "tx:topic-19", "title": "topic 19", "status": "draft"},
                {"id": "c2", "identifier": "tx:topic-20", "title": "topic 20", "status": "active"}
            ]),
            json!([]),
            "2025-06-28T00:00:00+00:00",
        ),
        topic(
            2,
            "Topic number two",
            "active",
            Some("Description text from topic two"),
            json!([]),
            json!([
                {"id": "p1", "identifier": "tx:topic-17", "title": "Topic 17", "status": "active"}
            ]),
            "2025-06-30T00:00:00+00:00",
        ),
        topic(
            3,
            "Topic number three",
            "draft",
            Some("This topic is processing new data"),
            json!([]),
            json!([]),
            "2025-07-08T00:00:00+00:00",
        ),
        topic(
            4,
            "Topic number four",
            "deprecated",
            Some("Deprecated topic example"),
            json!([]),
            json!([]),
            "2025-06-08T00:00:00+00:00",
        ),
        topic(
            5,
            "Topic number five",
            "active",
            None,
            json!([]),
            json!([]),
            "2025-07-16T00:00:00+00:00",
        ),
        topic(
            6,
            "Topic 10",
            "draft",
            Some("Description text for topic 10"),
            json!([]),
            json!([]),
            "2025-07-23T00:00:00+00:00",
        ),
    ]
}

#[derive(Debug, Deserialize, Default)]
struct TopicParams {
    limit: Option<usize>,
    offset: Option<usize>,
    status: Option<String>,
    search: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

async fn list_taxonomies_route() -> Response {
    let items = taxonomies();
    let total = items.as_array().map_or(0, Vec::len);
    axum::Json(json!({"items": items, "total": total, "limit": 50, "offset": 0})).into_response()
}

async fn list_topics_route(
    State(fixtures): State<Arc<Vec<Value>>>,
    Path(taxonomy_id): Path<String>,
    Query(params): Query<TopicParams>,
) -> Response {
    // Dedicated taxonomy id exercising the validation-error body shape.
    if taxonomy_id == "invalid" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({"detail": [{"msg": "bad value"}, {"type": "missing"}]})),
        )
            .into_response();
    }

    let mut items: Vec<Value> = if taxonomy_id == TAXONOMY_ONE {
        fixtures.as_ref().clone()
    } else {
        Vec::new()
    };

    if let Some(status) = &params.status {
        items.retain(|record| {
            record["topic"]["status"]
                .as_str()
                .is_some_and(|s| s.eq_ignore_ascii_case(status))
        });
    }

    if let Some(search) = &params.search {
        let needle = search.to_lowercase();
        items.retain(|record| {
            let title = record["topic"]["title"].as_str().unwrap_or_default();
            let description = record["topic"]["description"].as_str().unwrap_or_default();
            title.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle)
        });
    }

    let sort_by = params.sort_by.as_deref().unwrap_or("title");
    let descending = params.sort_order.as_deref() == Some("desc");
    items.sort_by(|a, b| {
        let ordering = match sort_by {
            "status" => a["topic"]["status"]
                .as_str()
                .cmp(&b["topic"]["status"].as_str()),
            "created_at" => a["topic"]["created_at"]
                .as_str()
                .cmp(&b["topic"]["created_at"].as_str()),
            "updated_at" => a["topic"]["updated_at"]
                .as_str()
                .cmp(&b["topic"]["updated_at"].as_str()),
            "child_count" => a["child_count"].as_u64().cmp(&b["child_count"].as_u64()),
            _ => a["topic"]["title"].as_str().cmp(&b["topic"]["title"].as_str()),
        };
        if descending { ordering.reverse() } else { ordering }
    });

    let total = items.len();
    let offset = params.offset.unwrap_or(0);
    let limit = params.limit.unwrap_or(50);
    let page: Vec<Value> = items.into_iter().skip(offset).take(limit).collect();

    axum::Json(json!({"items": page, "total": total, "limit": limit, "offset": offset}))
        .into_response()
}

async fn get_topic_route(
    State(fixtures): State<Arc<Vec<Value>>>,
    Path(topic_id): Path<String>,
) -> Response {
    if topic_id == "empty" {
        return StatusCode::NO_CONTENT.into_response();
    }
    let found = fixtures
        .iter()
        .find(|record| record["topic"]["id"].as_str() == Some(topic_id.as_str()));
    match found {
        Some(record) => axum::Json(record.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({"detail": format!("Topic {topic_id} not found")})),
        )
            .into_response(),
    }
}

/// Spawn the mock API and return a client pointed at it.
async fn spawn_client() -> ApiClient {
    let fixtures = Arc::new(topics());
    let app = Router::new()
        .route("/api/taxonomies", get(list_taxonomies_route))
        .route("/api/taxonomies/:taxonomy_id/topics", get(list_topics_route))
        .route("/api/topics/:topic_id", get(get_topic_route))
        .with_state(fixtures);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ApiClient::new(&ApiConfig::new(format!("http://{addr}/api"))).unwrap()
}

#[tokio::test]
async fn lists_taxonomies() {
    let client = spawn_client().await;
    let page = client.list_taxonomies(&Default::default()).await.unwrap();
    assert_eq!(page.total, 2);
    let titles: Vec<_> = page.items.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Taxonomy One", "Taxonomy Two"]);
}

#[tokio::test]
async fn status_filter_returns_only_draft_topics() {
    let client = spawn_client().await;
    let query = TopicQuery {
        status: Some(TopicStatus::Draft),
        ..TopicQuery::default()
    };
    let page = client
        .list_taxonomy_topics(TAXONOMY_ONE, &query)
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    let titles: Vec<_> = page
        .items
        .iter()
        .map(|record| record.topic.title.as_str())
        .collect();
    // Title ascending: "Topic 10" sorts before "Topic number three".
    assert_eq!(titles, vec!["Topic 10", "Topic number three"]);
}

#[tokio::test]
async fn search_matches_title_and_description() {
    let client = spawn_client().await;
    let query = TopicQuery {
        search: Some("processing".to_string()),
        ..TopicQuery::default()
    };
    let page = client
        .list_taxonomy_topics(TAXONOMY_ONE, &query)
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].topic.title, "Topic number three");
}

#[tokio::test]
async fn empty_search_is_not_sent_as_a_filter() {
    let client = spawn_client().await;
    let query = TopicQuery {
        search: Some(String::new()),
        ..TopicQuery::default()
    };
    let page = client
        .list_taxonomy_topics(TAXONOMY_ONE, &query)
        .await
        .unwrap();
    // An empty search parameter would match nothing server-side; omitting it
    // returns the whole taxonomy.
    assert_eq!(page.total, 6);
}

#[tokio::test]
async fn sorts_by_child_count_descending() {
    let client = spawn_client().await;
    let query = TopicQuery {
        sort_by: SortKey::ChildCount,
        sort_order: SortOrder::Desc,
        ..TopicQuery::default()
    };
    let page = client
        .list_taxonomy_topics(TAXONOMY_ONE, &query)
        .await
        .unwrap();
    assert_eq!(page.items[0].topic.title, "Topic number one");
    assert_eq!(page.items[0].child_count, 2);
}

#[tokio::test]
async fn paginates_with_limit_and_offset() {
    let client = spawn_client().await;
    let query = TopicQuery {
        limit: 2,
        offset: 4,
        ..TopicQuery::default()
    };
    let page = client
        .list_taxonomy_topics(TAXONOMY_ONE, &query)
        .await
        .unwrap();
    assert_eq!(page.total, 6);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.offset, 4);
}

#[tokio::test]
async fn fetches_a_single_topic() {
    let client = spawn_client().await;
    let overview = client
        .get_topic("10000000-0000-0000-0000-000000000002")
        .await
        .unwrap();
    assert_eq!(overview.topic.title, "Topic number two");
    assert_eq!(overview.first_parent_title(), Some("Topic 17"));
}

#[tokio::test]
async fn missing_topic_surfaces_the_detail_message() {
    let client = spawn_client().await;
    let error = client.get_topic("nope").await.unwrap_err();
    assert_eq!(error.status(), Some(404));
    assert_eq!(error.to_string(), "Topic nope not found");
}

#[tokio::test]
async fn validation_errors_join_msg_and_type() {
    let client = spawn_client().await;
    let error = client
        .list_taxonomy_topics("invalid", &TopicQuery::default())
        .await
        .unwrap_err();
    assert_eq!(error.status(), Some(422));
    assert_eq!(error.to_string(), "bad value, missing");
}

#[tokio::test]
async fn no_content_maps_to_empty_body() {
    let client = spawn_client().await;
    let error = client.get_topic("empty").await.unwrap_err();
    assert_eq!(error, ApiError::EmptyBody);
}
