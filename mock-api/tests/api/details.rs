use payloads::ClientError;

use test_helpers::spawn_app;

#[tokio::test]
async fn details_are_shaped() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let details = app.details("tt1375666").await?;

    assert_eq!(details.title.as_deref(), Some("Inception"));
    assert_eq!(details.year.as_deref(), Some("2010"));
    assert_eq!(details.director.as_deref(), Some("Christopher Nolan"));
    assert_eq!(details.rating.as_deref(), Some("8.8"));
    // the full plot is requested, so the second sentence survives
    assert!(details.plot.as_deref().is_some_and(|p| p.contains("C.E.O.")));
    assert_eq!(details.poster, None);
    Ok(())
}

#[tokio::test]
async fn sparse_record_has_no_extra_fields() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let details = app.details("tt0234215").await?;

    assert_eq!(
        serde_json::to_value(&details)?,
        serde_json::json!({ "title": "The Matrix Reloaded", "year": "2003" })
    );
    Ok(())
}

#[tokio::test]
async fn raw_record_keeps_provider_keys() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let record = app
        .client
        .get_movie_record(&payloads::MovieId::new("tt0133093"))
        .await?;

    assert_eq!(record.get("Title"), Some(&"The Matrix".into()));
    assert_eq!(record.get("Response"), Some(&"True".into()));
    Ok(())
}

#[tokio::test]
async fn unknown_id_is_provider_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.details("tt0000000").await;

    match result {
        Err(ClientError::Provider(message)) => {
            assert_eq!(message, "Incorrect IMDb ID.")
        }
        other => panic!("expected provider error, got {other:?}"),
    }
    Ok(())
}
