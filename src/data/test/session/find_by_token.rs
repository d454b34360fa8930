use super::*;

/// Tests lookup of an unknown token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let found = repo.find_by_token("missing").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that the stored expiry round-trips.
///
/// The repository does not interpret expiry; it must hand the stored value
/// back for the token guard to compare.
///
/// Expected: Ok(Some) with an expiry in the past for an expired session
#[tokio::test]
async fn returns_session_with_stored_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;

    let repo = SessionRepository::new(db);
    repo.create("old-token", &account.uuid, Utc::now() - Duration::hours(1))
        .await?;

    let found = repo.find_by_token("old-token").await?;
    assert!(found.is_some());
    assert!(found.unwrap().expires_at < Utc::now());

    Ok(())
}
