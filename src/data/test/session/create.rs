use super::*;

/// Tests persisting a new login session.
///
/// Expected: Ok with the session retrievable by its token
#[tokio::test]
async fn persists_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    let expires_at = Utc::now() + Duration::days(7);

    let repo = SessionRepository::new(db);
    repo.create("token-a", &account.uuid, expires_at).await?;

    let found = repo.find_by_token("token-a").await?;
    assert!(found.is_some());
    let session = found.unwrap();
    assert_eq!(session.uuid, account.uuid);

    Ok(())
}

/// Tests that duplicate tokens are rejected.
///
/// Tokens are primary keys; a collision must surface as a database error
/// rather than silently rebinding the token to another account.
///
/// Expected: Err for the second insert
#[tokio::test]
async fn rejects_duplicate_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    let expires_at = Utc::now() + Duration::days(7);

    let repo = SessionRepository::new(db);
    repo.create("token-a", &account.uuid, expires_at).await?;

    let result = repo.create("token-a", &account.uuid, expires_at).await;
    assert!(result.is_err());

    Ok(())
}
