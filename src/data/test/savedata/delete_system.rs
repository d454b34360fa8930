use super::*;

/// Tests deleting an existing system save record.
///
/// Expected: Ok with the record gone afterwards
#[tokio::test]
async fn deletes_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_save_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    save::create_system_save(db, &account.uuid).await?;

    let repo = SaveDataRepository::new(db);
    repo.delete_system(&account.uuid).await?;

    assert!(repo.get_system(&account.uuid).await?.is_none());

    Ok(())
}

/// Tests deleting when no system save exists.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_save_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;

    let repo = SaveDataRepository::new(db);
    let result = repo.delete_system(&account.uuid).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that session saves survive a system deletion.
///
/// Expected: Ok with all session rows still present
#[tokio::test]
async fn leaves_session_saves_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_save_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    save::create_system_save(db, &account.uuid).await?;
    save::create_session_save(db, &account.uuid, 0).await?;
    save::create_session_save(db, &account.uuid, 1).await?;

    let repo = SaveDataRepository::new(db);
    repo.delete_system(&account.uuid).await?;

    let count = entity::prelude::SessionSaveData::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
