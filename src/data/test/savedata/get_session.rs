use super::*;

/// Tests fetching the session save for a specific slot.
///
/// Verifies that the lookup is keyed by (uuid, slot) and does not leak
/// documents across slots.
///
/// Expected: Ok(Some) with the slot's own document
#[tokio::test]
async fn returns_document_for_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_save_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    save::create_session_save_with(db, &account.uuid, 0, json!({ "floor": 1 })).await?;
    save::create_session_save_with(db, &account.uuid, 1, json!({ "floor": 50 })).await?;

    let repo = SaveDataRepository::new(db);
    let fetched = repo.get_session(&account.uuid, 1).await?;

    assert_eq!(fetched, Some(json!({ "floor": 50 })));

    Ok(())
}

/// Tests fetching from an empty slot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_empty_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_save_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    save::create_session_save(db, &account.uuid, 0).await?;

    let repo = SaveDataRepository::new(db);
    let fetched = repo.get_session(&account.uuid, 3).await?;

    assert!(fetched.is_none());

    Ok(())
}
