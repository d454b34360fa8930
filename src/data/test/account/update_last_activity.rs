use super::*;

/// Tests stamping the last-activity timestamp.
///
/// Expected: Ok with last_activity set after the update
#[tokio::test]
async fn stamps_last_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_account(db).await?;
    assert!(created.last_activity.is_none());

    let repo = AccountRepository::new(db);
    repo.update_last_activity(&created.uuid).await?;

    let refreshed = repo.find_by_uuid(&created.uuid).await?.unwrap();
    assert!(refreshed.last_activity.is_some());

    Ok(())
}

/// Tests the update for an account that does not exist.
///
/// The update is used as an advisory operation, so a missing account must not
/// surface as an error.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_unknown_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let result = repo.update_last_activity(&[9u8; 16]).await;

    assert!(result.is_ok());

    Ok(())
}
