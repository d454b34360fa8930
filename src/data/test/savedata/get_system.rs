use super::*;

/// Tests fetching a stored system save document.
///
/// Expected: Ok(Some) with the document returned verbatim
#[tokio::test]
async fn returns_document_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_save_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;
    let document = json!({ "playTime": 1234, "unlocks": ["hard_mode"] });
    save::create_system_save_with(db, &account.uuid, document.clone()).await?;

    let repo = SaveDataRepository::new(db);
    let fetched = repo.get_system(&account.uuid).await?;

    assert_eq!(fetched, Some(document));

    Ok(())
}

/// Tests fetching when the account has no system save.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_save_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = create_account(db).await?;

    let repo = SaveDataRepository::new(db);
    let fetched = repo.get_system(&account.uuid).await?;

    assert!(fetched.is_none());

    Ok(())
}
