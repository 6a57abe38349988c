//! HTTP contract tests for the venue API, run against a live server on an
//! ephemeral port.

mod common;

use bigbox::domain::{FilterOptions, Health, VenuePage, VenueSummary};
use bigbox::error::ErrorBody;
use common::{FixtureVenue, TestServer, VALID_ROWS, VenueFixture, venues};
use reqwest::StatusCode;

async fn get_json<T: serde::de::DeserializeOwned>(server: &TestServer, path: &str) -> T {
    let response = reqwest::get(server.url(path)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "GET {path}");
    response.json().await.unwrap()
}

async fn get_error(server: &TestServer, path: &str) -> (StatusCode, ErrorBody) {
    let response = reqwest::get(server.url(path)).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

fn matching(pred: impl Fn(&FixtureVenue) -> bool) -> Vec<FixtureVenue> {
    venues().into_iter().filter(|v| pred(v)).collect()
}

#[tokio::test]
async fn test_health() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;
    let health: Health = get_json(&server, "/api/health").await;
    assert!(health.ok);
}

#[tokio::test]
async fn test_default_listing() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let page: VenuePage = get_json(&server, "/api/pois").await;
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 25);
    assert_eq!(page.total_count, VALID_ROWS as u64);
    assert_eq!(page.items.len(), 25);
    assert!(page.items.windows(2).all(|w| w[0].visits >= w[1].visits));

    let busiest = venues().into_iter().map(|v| v.visits).max().unwrap();
    assert_eq!(page.items[0].visits, busiest);
}

#[tokio::test]
async fn test_chain_and_state_filter_is_case_insensitive() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let page: VenuePage = get_json(&server, "/api/pois?chain_name=walmart&state=tx&page_size=100").await;
    let expected = matching(|v| v.chain_name == Some("Walmart") && v.state == "TX");

    assert_eq!(page.total_count, expected.len() as u64);
    assert_eq!(page.items.len(), expected.len());
    for item in &page.items {
        assert_eq!(item.chain_name.as_deref(), Some("Walmart"));
        assert_eq!(item.state.as_deref(), Some("TX"));
    }
}

#[tokio::test]
async fn test_page_past_the_end_is_empty_with_full_total() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let page: VenuePage = get_json(&server, "/api/pois?chain_name=Walmart&page=9999&page_size=25").await;
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 50);
    assert_eq!(page.page, 9999);
}

#[tokio::test]
async fn test_last_partial_page() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let page: VenuePage = get_json(&server, "/api/pois?page=5&page_size=25").await;
    assert_eq!(page.items.len(), VALID_ROWS - 4 * 25);
}

#[tokio::test]
async fn test_name_sort_ignores_case() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let page: VenuePage = get_json(&server, "/api/pois?sort_by=name&sort_dir=asc&page_size=100").await;

    let mut expected = venues();
    expected.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()).then(a.entity_id.cmp(&b.entity_id)));
    let expected_ids: Vec<&str> = expected.iter().take(100).map(|v| v.entity_id.as_str()).collect();
    let actual_ids: Vec<&str> = page.items.iter().map(|v| v.entity_id.as_str()).collect();
    assert_eq!(actual_ids, expected_ids);
}

#[tokio::test]
async fn test_open_state_and_dma_filters() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let closed: VenuePage = get_json(&server, "/api/pois?is_open=closed&page_size=100").await;
    assert_eq!(closed.total_count, matching(|v| !v.is_open).len() as u64);
    assert!(closed.items.iter().all(|v| !v.is_open));

    let by_code: VenuePage = get_json(&server, "/api/pois?dma=618").await;
    let by_float: VenuePage = get_json(&server, "/api/pois?dma=618.0").await;
    assert_eq!(by_code.total_count, matching(|v| v.dma == Some(618)).len() as u64);
    assert_eq!(by_code, by_float);
}

#[tokio::test]
async fn test_unfiltered_summary_covers_every_venue() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let summary: VenueSummary = get_json(&server, "/api/summary").await;
    assert_eq!(summary, VenueSummary {
        total_venues: VALID_ROWS as u64,
        total_foot_traffic: venues().iter().map(|v| v.visits).sum::<i64>(),
    });
}

#[tokio::test]
async fn test_summary_matches_filtered_rows() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let summary: VenueSummary = get_json(&server, "/api/summary?chain_name=Walmart").await;
    let walmart = matching(|v| v.chain_name == Some("Walmart"));
    assert_eq!(summary.total_venues, 50);
    assert_eq!(summary.total_foot_traffic, walmart.iter().map(|v| v.visits).sum::<i64>());

    // Page and sort parameters do not change the aggregate.
    let paged: VenueSummary =
        get_json(&server, "/api/summary?chain_name=Walmart&page=3&page_size=5&sort_by=name&sort_dir=asc").await;
    assert_eq!(paged, summary);

    let none: VenueSummary = get_json(&server, "/api/summary?chain_name=Nonexistent").await;
    assert_eq!(none, VenueSummary {
        total_venues: 0,
        total_foot_traffic: 0
    });
}

#[tokio::test]
async fn test_options_exclude_blank_values() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let options: FilterOptions = get_json(&server, "/api/options").await;
    assert_eq!(options.chain_names, vec!["Costco", "Target", "Walmart"]);
    assert_eq!(options.dmas, vec![501, 609, 618, 803]);
    assert_eq!(options.categories, vec!["Department Stores", "Discount Stores", "Warehouse Clubs"]);
}

#[tokio::test]
async fn test_invalid_parameters_are_rejected() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let cases = [
        ("/api/pois?page=0", "page"),
        ("/api/pois?page=-2", "page"),
        ("/api/pois?page=abc", "page"),
        ("/api/pois?page_size=101", "page_size"),
        ("/api/pois?page_size=0", "page_size"),
        ("/api/pois?sort_by=visits", "sort_by"),
        ("/api/pois?sort_dir=up", "sort_dir"),
        ("/api/pois?is_open=maybe", "is_open"),
        ("/api/pois?dma=618.5", "dma"),
        ("/api/pois?chain_name=", "chain_name"),
        ("/api/summary?dma=abc", "dma"),
        ("/api/summary?is_open=yes", "is_open"),
    ];

    for (path, field) in cases {
        let (status, body) = get_error(&server, path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(body.error.code, "VALIDATION_ERROR", "{path}");
        assert_eq!(body.error.field.as_deref(), Some(field), "{path}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let (status, body) = get_error(&server, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error.code, "NOT_FOUND");
}

#[tokio::test]
async fn test_missing_database_is_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let server = TestServer::start(vec![dir.path().join("absent.sqlite")]).await;

    let (status, body) = get_error(&server, "/api/pois").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error.code, "INTERNAL");
    assert_eq!(body.error.message, "Unexpected error");
    assert!(!body.error.message.contains("absent.sqlite"));

    // Liveness does not depend on the store.
    let health: Health = get_json(&server, "/api/health").await;
    assert!(health.ok);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let fixture = VenueFixture::build();
    let server = fixture.serve().await;

    let response = reqwest::Client::new()
        .get(server.url("/api/health"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert!(response.headers().contains_key("access-control-allow-origin"));
}
