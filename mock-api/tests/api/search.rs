use payloads::{ClientError, SearchQuery};
use reqwest::StatusCode;

use test_helpers::{
    assert_status_code, spawn_app, spawn_app_with_generated,
    spawn_misbehaving_app,
};

#[tokio::test]
async fn single_match_fits_one_page() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let page = app.search("Inception").await?;

    assert_eq!(page.page_count, 1);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].title, "Inception");
    assert_eq!(page.results[0].id.as_str(), "tt1375666");
    assert_eq!(page.results[0].year.as_deref(), Some("2010"));
    // the catalog has no posters, and "N/A" is not passed through
    assert_eq!(page.results[0].poster, None);
    Ok(())
}

#[tokio::test]
async fn search_ignores_case() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let page = app.search("the matrix").await?;

    let titles: Vec<&str> =
        page.results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["The Matrix", "The Matrix Reloaded", "The Matrix Revolutions"]
    );
    Ok(())
}

#[tokio::test]
async fn no_match_is_empty_page() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let page = app.search("zzzzzz").await?;

    assert!(page.results.is_empty());
    assert_eq!(page.page_count, 0);
    Ok(())
}

#[tokio::test]
async fn results_are_paged() -> anyhow::Result<()> {
    let app = spawn_app_with_generated("Test Movie", 25).await;
    let first = SearchQuery::new("test movie");

    let page_one = app.client.search_movies(&first).await?;
    assert_eq!(page_one.page_count, 3);
    assert_eq!(page_one.results.len(), 10);
    assert_eq!(page_one.results[0].title, "Test Movie 1");

    let page_three = app.client.search_movies(&first.with_page(3)).await?;
    assert_eq!(page_three.page_count, 3);
    assert_eq!(page_three.results.len(), 5);
    assert_eq!(page_three.results[0].title, "Test Movie 21");
    Ok(())
}

#[tokio::test]
async fn page_past_the_end_is_empty() -> anyhow::Result<()> {
    let app = spawn_app_with_generated("Test Movie", 12).await;

    let page = app
        .client
        .search_movies(&SearchQuery::new("Test Movie").with_page(5))
        .await?;

    assert!(page.is_empty());
    Ok(())
}

#[tokio::test]
async fn demo_catalog_has_two_pages_of_aliens() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let page = app.search("alien").await?;

    assert_eq!(page.page_count, 2);
    assert_eq!(page.results.len(), 10);
    Ok(())
}

#[tokio::test]
async fn wrong_api_key_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = app.client_with_api_key("not-the-key");

    let result = client.search_movies(&SearchQuery::new("Inception")).await;

    assert_status_code(result, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn zero_page_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let url = format!(
        "{}/?apikey={}&s=Inception&page=0",
        app.address(),
        test_helpers::TEST_API_KEY
    );
    let response = app.client.inner_client.get(&url).send().await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn non_json_body_is_an_error() -> anyhow::Result<()> {
    let app = spawn_misbehaving_app().await;

    let result = app.search("Inception").await;

    assert!(
        matches!(result, Err(ClientError::InvalidResponse(_))),
        "expected an invalid response error, got {result:?}"
    );
    Ok(())
}
