use super::*;

/// Tests deleting a session by token.
///
/// Expected: Ok with the session no longer retrievable
#[tokio::test]
async fn removes_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;

    let repo = SessionRepository::new(db);
    repo.create("token-a", &account.uuid, Utc::now() + Duration::days(7))
        .await?;

    repo.delete("token-a").await?;

    assert!(repo.find_by_token("token-a").await?.is_none());

    Ok(())
}

/// Tests deleting an unknown token.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let result = repo.delete("missing").await;

    assert!(result.is_ok());

    Ok(())
}
