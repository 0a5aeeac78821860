use anyhow::Result;
use std::time::Duration;
use test_helpers::{
    spawn_app, spawn_app_with_generated, spawn_misbehaving_app, spawn_slow_app,
};
use tokio::time::{Instant, sleep};
use tracing::info;

use crate::framework::{
    TestEnvironment, is_present, result_titles, search_for, wait_for,
    wait_for_result,
};

/// Typing a title and pressing Search lists the match. One page of results
/// shows no pagination.
#[tokio::test]
async fn test_search_shows_matching_movie() -> Result<()> {
    let env = TestEnvironment::setup(spawn_app().await).await?;

    search_for(&env.browser, "Inception").await?;

    let titles = wait_for_result(&env.browser, "Inception").await?;
    assert_eq!(titles.len(), 1);
    assert!(titles[0].contains("2010"));
    assert!(!is_present(&env.browser, "#pagination").await?);
    assert_eq!(env.api.requests.searches(), 1);
    Ok(())
}

/// Two or more pages show the pagination control. Picking a page fetches it.
#[tokio::test]
async fn test_pagination_moves_between_pages() -> Result<()> {
    let api = spawn_app_with_generated("Test Movie", 25).await;
    let env = TestEnvironment::setup(api).await?;

    search_for(&env.browser, "test movie").await?;
    wait_for_result(&env.browser, "Test Movie 1").await?;
    wait_for(&env.browser, "#pagination").await?;

    info!("📄 Moving to page 2");
    env.browser
        .find(fantoccini::Locator::XPath(
            "//nav[@id='pagination']//button[normalize-space(text())='2']",
        ))
        .await?
        .click()
        .await?;

    let titles = wait_for_result(&env.browser, "Test Movie 11").await?;
    assert_eq!(titles.len(), 10);
    assert!(titles[0].contains("Test Movie 11"));
    assert_eq!(env.api.requests.searches(), 2);
    Ok(())
}

/// A search that matches nothing shows the message, and editing the input
/// clears it.
#[tokio::test]
async fn test_no_results_message_clears_on_edit() -> Result<()> {
    let env = TestEnvironment::setup(spawn_app().await).await?;

    search_for(&env.browser, "zzzzzz").await?;
    wait_for(&env.browser, "#no-results").await?;
    assert!(!is_present(&env.browser, "#pagination").await?);

    let input = env.browser.find(fantoccini::Locator::Id("movie-search")).await?;
    input.send_keys("z").await?;
    sleep(Duration::from_millis(300)).await;

    assert!(!is_present(&env.browser, "#no-results").await?);
    Ok(())
}

/// A body that is not JSON is reported as a failed search, not as an empty
/// one.
#[tokio::test]
async fn test_malformed_response_shows_error() -> Result<()> {
    let env = TestEnvironment::setup(spawn_misbehaving_app().await).await?;

    search_for(&env.browser, "Inception").await?;

    wait_for(&env.browser, "#search-error").await?;
    assert!(!is_present(&env.browser, "#no-results").await?);
    Ok(())
}

/// An answer to an earlier search that arrives after a newer search was
/// issued is never shown, and the page keeps loading until the newer answer
/// comes in.
#[tokio::test]
async fn test_superseded_search_is_never_shown() -> Result<()> {
    let latency = Duration::from_millis(1500);
    let env = TestEnvironment::setup(spawn_slow_app(latency).await).await?;

    let started = Instant::now();
    search_for(&env.browser, "Alien").await?;
    sleep(Duration::from_millis(700)).await;
    search_for(&env.browser, "Inception").await?;

    let deadline = started + Duration::from_secs(10);
    loop {
        let titles = result_titles(&env.browser).await?;
        assert!(
            titles.iter().all(|title| !title.contains("Alien")),
            "stale results were shown: {titles:?}"
        );
        if titles.iter().any(|title| title.contains("Inception")) {
            break;
        }
        // the first answer is in by now, but the second is still pending
        if started.elapsed() > latency + Duration::from_millis(300)
            && started.elapsed() < latency + Duration::from_millis(500)
        {
            assert!(is_present(&env.browser, "#search-loading").await?);
        }
        assert!(Instant::now() < deadline, "newer search never resolved");
        sleep(Duration::from_millis(50)).await;
    }

    assert_eq!(env.api.requests.searches(), 2);
    Ok(())
}

/// Pressing Search again while the same query is loading does not issue a
/// second request. Pressing it after the answer arrives does.
#[tokio::test]
async fn test_repeated_search_waits_for_request_in_flight() -> Result<()> {
    let env = TestEnvironment::setup(
        spawn_slow_app(Duration::from_millis(1000)).await,
    )
    .await?;

    search_for(&env.browser, "Inception").await?;
    env.browser
        .find(fantoccini::Locator::Id("search-button"))
        .await?
        .click()
        .await?;

    wait_for_result(&env.browser, "Inception").await?;
    assert_eq!(env.api.requests.searches(), 1);

    env.browser
        .find(fantoccini::Locator::Id("search-button"))
        .await?
        .click()
        .await?;
    wait_for(&env.browser, "#search-loading").await?;
    wait_for_result(&env.browser, "Inception").await?;
    assert_eq!(env.api.requests.searches(), 2);
    Ok(())
}
