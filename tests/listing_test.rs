//! Integration tests for the listing fetcher against a local HTTP server

#[path = "common/mod.rs"]
mod common;

use common::*;
use httpmock::prelude::*;
use publix_bogo::config::FetcherConfig;
use publix_bogo::errors::AppError;
use publix_bogo::listing::ListingFetcher;
use publix_bogo::models::StoreId;
use std::time::Duration;

#[test]
fn test_fetch_and_extract_end_to_end() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET)
            .path(LISTING_PATH)
            .query_param("StoreID", "2500579")
            .query_param("CategoryID", "5232540");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(SAMPLE_LISTING);
    });

    let fetcher =
        ListingFetcher::with_config(StoreId::from(2500579), &mock_config(&server)).unwrap();

    assert_eq!(fetcher.validity_date_raw().unwrap(), "5/21 - 5/27");
    assert_eq!(fetcher.validity_date_normalized().unwrap(), "5/21 - 5/27");
    assert_eq!(fetcher.bogo_items(), vec!["Apples", "Bread", "Yogurt"]);
    assert_eq!(fetcher.store().as_str(), "2500579");
    assert!(fetcher
        .url()
        .ends_with("?StoreID=2500579&CategoryID=5232540"));
    page.assert();
}

#[test]
fn test_operations_never_refetch() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path(LISTING_PATH);
        then.status(200).body(SAMPLE_LISTING);
    });

    let fetcher = ListingFetcher::with_config(StoreId::from(1), &mock_config(&server)).unwrap();
    let first = fetcher.bogo_items();
    let second = fetcher.bogo_items();
    fetcher.validity_date_raw().unwrap();
    fetcher.validity_date_normalized().unwrap();
    fetcher.summary().unwrap();

    assert_eq!(first, second);
    page.assert_hits(1);
}

#[test]
fn test_summary_collects_all_fields() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(LISTING_PATH);
        then.status(200).body(SAMPLE_LISTING);
    });

    let summary = ListingFetcher::with_config(StoreId::from(7), &mock_config(&server))
        .unwrap()
        .summary()
        .unwrap();

    assert_eq!(summary.store, StoreId::from(7));
    assert_eq!(summary.validity_raw, "5/21 - 5/27");
    assert_eq!(summary.validity, "5/21 - 5/27");
    assert_eq!(summary.items, vec!["Apples", "Bread", "Yogurt"]);
}

#[test]
fn test_coming_soon_page_is_no_match() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(LISTING_PATH);
        then.status(200).body(COMING_SOON_LISTING);
    });

    let fetcher = ListingFetcher::with_config(StoreId::from(1), &mock_config(&server)).unwrap();
    assert_eq!(fetcher.validity_date_raw().unwrap(), "Dates coming soon");
    assert!(matches!(
        fetcher.validity_date_normalized(),
        Err(AppError::NoMatch { .. })
    ));
    assert!(matches!(fetcher.summary(), Err(AppError::NoMatch { .. })));
}

#[test]
fn test_empty_page_has_no_items_and_no_dates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(LISTING_PATH);
        then.status(200).body(EMPTY_LISTING);
    });

    let fetcher = ListingFetcher::with_config(StoreId::from(1), &mock_config(&server)).unwrap();
    assert!(fetcher.bogo_items().is_empty());
    assert!(matches!(
        fetcher.validity_date_raw(),
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        fetcher.validity_date_normalized(),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn test_server_error_is_network_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(LISTING_PATH);
        then.status(503).body("maintenance");
    });

    let err = ListingFetcher::with_config(StoreId::from(1), &mock_config(&server)).unwrap_err();
    match err {
        AppError::NetworkError(msg) => assert!(msg.contains("503")),
        other => panic!("Expected NetworkError, got {other:?}"),
    }
}

#[test]
fn test_not_found_status_is_network_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(LISTING_PATH);
        then.status(404);
    });

    let err = ListingFetcher::with_config(StoreId::from(1), &mock_config(&server)).unwrap_err();
    assert!(matches!(err, AppError::NetworkError(_)));
}

#[test]
fn test_connection_refused_is_network_error() {
    let config = FetcherConfig {
        base_url: "http://127.0.0.1:1/ByCategory/?StoreID".to_string(),
        ..FetcherConfig::default()
    };

    let err = ListingFetcher::with_config(StoreId::from(1), &config).unwrap_err();
    assert!(matches!(err, AppError::NetworkError(_)));
}

#[test]
fn test_slow_response_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(LISTING_PATH);
        then.status(200)
            .delay(Duration::from_secs(3))
            .body(SAMPLE_LISTING);
    });
    let config = FetcherConfig {
        timeout_secs: 1,
        ..mock_config(&server)
    };

    let err = ListingFetcher::with_config(StoreId::from(1), &config).unwrap_err();
    assert!(matches!(err, AppError::NetworkError(_)));
}

#[test]
fn test_custom_category_reaches_server() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET)
            .path(LISTING_PATH)
            .query_param("StoreID", "0042")
            .query_param("CategoryID", "99");
        then.status(200).body(SAMPLE_LISTING);
    });
    let config = FetcherConfig {
        category_id: "99".to_string(),
        ..mock_config(&server)
    };

    ListingFetcher::with_config(StoreId::new("0042").unwrap(), &config).unwrap();
    page.assert();
}
