mod details;
mod search;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let url = format!("{}/health_check", app.address());
    let response = app.client.inner_client.get(&url).send().await?;

    assert!(response.status().is_success());
    assert_eq!(response.text().await?, "healthy");
    Ok(())
}

#[tokio::test]
async fn accepted_movie_requests_are_counted() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.search("Inception").await?;
    app.details("tt1375666").await?;
    app.details("tt0078748").await?;

    assert_eq!(app.requests.searches(), 1);
    assert_eq!(app.requests.lookups(), 2);

    // a rejected key never reaches the catalog
    let intruder = app.client_with_api_key("not-the-key");
    let result = intruder
        .search_movies(&payloads::SearchQuery::new("Alien"))
        .await;
    assert!(result.is_err());
    assert_eq!(app.requests.searches(), 1);
    Ok(())
}

#[tokio::test]
async fn latency_delays_movie_responses() -> anyhow::Result<()> {
    let latency = std::time::Duration::from_millis(300);
    let app = test_helpers::spawn_slow_app(latency).await;

    let started = std::time::Instant::now();
    let page = app.search("Inception").await?;

    assert!(started.elapsed() >= latency);
    assert_eq!(page.results.len(), 1);
    Ok(())
}
