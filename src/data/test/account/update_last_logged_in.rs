use super::*;

/// Tests stamping the last-logged-in timestamp.
///
/// Expected: Ok with last_logged_in set after the update
#[tokio::test]
async fn stamps_last_logged_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_account(db).await?;
    assert!(created.last_logged_in.is_none());

    let repo = AccountRepository::new(db);
    repo.update_last_logged_in(&created.uuid).await?;

    let refreshed = repo.find_by_uuid(&created.uuid).await?.unwrap();
    assert!(refreshed.last_logged_in.is_some());

    Ok(())
}
