use payloads::responses::{ProviderStatus, SearchHit, SearchResponse};
use payloads::{
    ClientError, MovieDetails, MovieId, RawRecord, SearchQuery,
    filter_movie_details, page_count,
};
use serde_json::json;

fn record(value: serde_json::Value) -> RawRecord {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("test record must be a JSON object"),
    }
}

fn hit(title: &str, id: &str) -> SearchHit {
    SearchHit {
        title: title.to_string(),
        year: Some("2010".to_string()),
        imdb_id: id.to_string(),
        kind: Some("movie".to_string()),
        poster: Some("N/A".to_string()),
    }
}

#[test]
fn test_details_keys_are_renamed() {
    let raw = record(json!({ "Title": "Test Movie", "Year": "2023" }));

    let details = filter_movie_details(&raw);

    assert_eq!(details.title.as_deref(), Some("Test Movie"));
    assert_eq!(details.year.as_deref(), Some("2023"));
    assert_eq!(
        serde_json::to_value(&details).unwrap(),
        json!({ "title": "Test Movie", "year": "2023" })
    );
}

#[test]
fn test_unlisted_and_placeholder_fields_are_dropped() {
    let raw = record(json!({
        "Title": "Inception",
        "imdbRating": "8.8",
        "Awards": "N/A",
        "Ratings": [{ "Source": "Internet Movie Database", "Value": "8.8/10" }],
        "Metascore": 74,
        "Response": "True",
        "imdbID": "tt1375666",
    }));

    let details = filter_movie_details(&raw);

    assert_eq!(
        serde_json::to_value(&details).unwrap(),
        json!({ "title": "Inception", "rating": "8.8" })
    );
}

#[test]
fn test_empty_record_shapes_to_empty_object() {
    let details = filter_movie_details(&RawRecord::new());

    assert!(details.is_empty());
    assert_eq!(serde_json::to_string(&details).unwrap(), "{}");
}

#[test]
fn test_display_rows_follow_panel_order() {
    let details = MovieDetails {
        title: Some("Inception".into()),
        plot: Some("A thief who steals corporate secrets.".into()),
        year: Some("2010".into()),
        director: Some("Christopher Nolan".into()),
        ..Default::default()
    };

    let labels: Vec<&str> =
        details.display_rows().into_iter().map(|(label, _)| label).collect();

    assert_eq!(labels, vec!["Year", "Director", "Plot"]);
}

#[test]
fn test_page_count_rounds_up() {
    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(1), 1);
    assert_eq!(page_count(10), 1);
    assert_eq!(page_count(11), 2);
    assert_eq!(page_count(25), 3);
}

#[test]
fn test_search_query_pages_are_one_based() {
    let query = SearchQuery::new("Inception");
    assert_eq!(query.page, 1);
    assert_eq!(query.with_page(0).page, 1);
    assert_eq!(query.at_selected_page(0).page, 1);
    assert_eq!(query.at_selected_page(2).page, 3);
    assert_eq!(query.at_selected_page(2).text, "Inception");
}

#[test]
fn test_blank_search_query_is_empty() {
    assert!(SearchQuery::default().is_empty());
    assert!(SearchQuery::new("   ").is_empty());
    assert!(!SearchQuery::new("Alien").is_empty());
}

#[test]
fn test_found_response_becomes_page() -> anyhow::Result<()> {
    let body: SearchResponse = serde_json::from_value(json!({
        "Search": [
            { "Title": "Inception", "Year": "2010", "imdbID": "tt1375666",
              "Type": "movie", "Poster": "https://example.com/inception.jpg" }
        ],
        "totalResults": "1",
        "Response": "True"
    }))?;

    let page = body.into_page()?;

    assert_eq!(page.page_count, 1);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].id, MovieId::new("tt1375666"));
    assert_eq!(page.results[0].title, "Inception");
    assert_eq!(
        page.results[0].poster.as_deref(),
        Some("https://example.com/inception.jpg")
    );
    Ok(())
}

#[test]
fn test_total_results_drive_page_count() -> anyhow::Result<()> {
    let body = SearchResponse::found(vec![hit("Inception", "tt1375666")], 12);

    let page = body.into_page()?;

    assert_eq!(page.page_count, 2);
    assert_eq!(page.results[0].poster, None);
    Ok(())
}

#[test]
fn test_not_found_response_is_empty_page() -> anyhow::Result<()> {
    let body: SearchResponse = serde_json::from_value(json!({
        "Response": "False",
        "Error": "Movie not found!"
    }))?;
    assert_eq!(body.response, ProviderStatus::False);

    let page = body.into_page()?;

    assert!(page.is_empty());
    assert_eq!(page.page_count, 0);
    Ok(())
}

#[test]
fn test_other_provider_failures_are_errors() -> anyhow::Result<()> {
    let body: SearchResponse = serde_json::from_value(json!({
        "Response": "False",
        "Error": "Too many results."
    }))?;

    match body.into_page() {
        Err(ClientError::Provider(message)) => {
            assert_eq!(message, "Too many results.")
        }
        other => panic!("expected provider error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_record_failure_reads_error_text() {
    let failed = record(json!({
        "Response": "False",
        "Error": "Incorrect IMDb ID."
    }));
    let found = record(json!({ "Title": "Alien", "Response": "True" }));

    assert_eq!(
        payloads::responses::record_failure(&failed).as_deref(),
        Some("Incorrect IMDb ID.")
    );
    assert_eq!(payloads::responses::record_failure(&found), None);
}
