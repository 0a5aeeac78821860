use anyhow::Result;
use fantoccini::Locator;
use std::time::Duration;
use test_helpers::spawn_app;
use tokio::time::sleep;

use crate::framework::{
    TestEnvironment, is_present, search_for, select_result, wait_for,
    wait_for_result,
};

async fn wait_for_details(env: &TestEnvironment, text: &str) -> Result<()> {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
    loop {
        let panel = wait_for(&env.browser, "#movie-details").await?;
        if panel.text().await?.contains(text) {
            return Ok(());
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(anyhow::anyhow!("Details never showed {text:?}"));
        }
        sleep(Duration::from_millis(100)).await;
    }
}

/// Selecting a result opens the panel with the shaped details.
#[tokio::test]
async fn test_selecting_movie_shows_details() -> Result<()> {
    let env = TestEnvironment::setup(spawn_app().await).await?;

    search_for(&env.browser, "Inception").await?;
    wait_for_result(&env.browser, "Inception").await?;
    select_result(&env.browser, "Inception").await?;

    wait_for_details(&env, "Christopher Nolan").await?;
    let panel = env.browser.find(Locator::Id("movie-details")).await?;
    let text = panel.text().await?;
    assert!(text.contains("PG-13"));
    // "N/A" fields are left out
    assert!(!text.contains("N/A"));
    assert_eq!(env.api.requests.lookups(), 1);
    Ok(())
}

/// Selecting the same movie again fetches nothing. A different movie is
/// fetched exactly once.
#[tokio::test]
async fn test_details_fetch_only_when_selection_changes() -> Result<()> {
    let env = TestEnvironment::setup(spawn_app().await).await?;

    search_for(&env.browser, "alien").await?;
    wait_for_result(&env.browser, "Alien 3").await?;

    select_result(&env.browser, "Alien 3").await?;
    wait_for_details(&env, "1992").await?;
    assert_eq!(env.api.requests.lookups(), 1);

    select_result(&env.browser, "Alien 3").await?;
    sleep(Duration::from_millis(500)).await;
    assert_eq!(env.api.requests.lookups(), 1);

    select_result(&env.browser, "Alien Nation").await?;
    wait_for_details(&env, "Alien Nation").await?;
    assert_eq!(env.api.requests.lookups(), 2);
    Ok(())
}

/// The close control hides the panel. Selecting again reopens it without a
/// new request.
#[tokio::test]
async fn test_close_hides_details() -> Result<()> {
    let env = TestEnvironment::setup(spawn_app().await).await?;

    search_for(&env.browser, "Inception").await?;
    wait_for_result(&env.browser, "Inception").await?;
    select_result(&env.browser, "Inception").await?;
    wait_for_details(&env, "Christopher Nolan").await?;

    env.browser
        .find(Locator::Css("button[aria-label='Close details']"))
        .await?
        .click()
        .await?;
    sleep(Duration::from_millis(300)).await;
    assert!(!is_present(&env.browser, "#movie-details").await?);

    select_result(&env.browser, "Inception").await?;
    wait_for_details(&env, "Christopher Nolan").await?;
    assert_eq!(env.api.requests.lookups(), 1);
    Ok(())
}
