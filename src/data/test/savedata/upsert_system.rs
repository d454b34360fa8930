use super::*;

/// Tests inserting a new system save document.
///
/// Expected: Ok with the document retrievable afterwards
#[tokio::test]
async fn inserts_new_document() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_save_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;

    let repo = SaveDataRepository::new(db);
    let document = json!({ "playTime": 1 });
    repo.upsert_system(&account.uuid, document.clone()).await?;

    assert_eq!(repo.get_system(&account.uuid).await?, Some(document));

    Ok(())
}

/// Tests replacing an existing system save document.
///
/// Verifies that a second upsert overwrites the stored document instead of
/// creating a second row.
///
/// Expected: Ok with one row holding the newer document
#[tokio::test]
async fn replaces_existing_document() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_save_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;

    let repo = SaveDataRepository::new(db);
    repo.upsert_system(&account.uuid, json!({ "playTime": 1 })).await?;
    repo.upsert_system(&account.uuid, json!({ "playTime": 2 })).await?;

    let count = entity::prelude::SystemSaveData::find().count(db).await?;
    assert_eq!(count, 1);
    assert_eq!(
        repo.get_system(&account.uuid).await?,
        Some(json!({ "playTime": 2 }))
    );

    Ok(())
}
