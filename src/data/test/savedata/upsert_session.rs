use super::*;

/// Tests inserting a new session save document.
///
/// Expected: Ok with the document retrievable from its slot
#[tokio::test]
async fn inserts_new_document() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_save_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;

    let repo = SaveDataRepository::new(db);
    let document = json!({ "floor": 7 });
    repo.upsert_session(&account.uuid, 2, document.clone()).await?;

    assert_eq!(repo.get_session(&account.uuid, 2).await?, Some(document));

    Ok(())
}

/// Tests replacing the document in one slot.
///
/// Verifies that the composite (uuid, slot) key is respected: the targeted
/// slot is overwritten while the other slots keep their documents.
///
/// Expected: Ok with slot 2 replaced and slot 0 untouched
#[tokio::test]
async fn replaces_only_the_given_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_save_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;

    let repo = SaveDataRepository::new(db);
    repo.upsert_session(&account.uuid, 0, json!({ "floor": 1 })).await?;
    repo.upsert_session(&account.uuid, 2, json!({ "floor": 2 })).await?;
    repo.upsert_session(&account.uuid, 2, json!({ "floor": 3 })).await?;

    let count = entity::prelude::SessionSaveData::find().count(db).await?;
    assert_eq!(count, 2);
    assert_eq!(
        repo.get_session(&account.uuid, 0).await?,
        Some(json!({ "floor": 1 }))
    );
    assert_eq!(
        repo.get_session(&account.uuid, 2).await?,
        Some(json!({ "floor": 3 }))
    );

    Ok(())
}
