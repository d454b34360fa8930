use super::*;

/// Tests finding an account by uuid.
///
/// Expected: Ok(Some) with the matching username
#[tokio::test]
async fn returns_account_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_account(db).await?;

    let repo = AccountRepository::new(db);
    let found = repo.find_by_uuid(&created.uuid).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().username, created.username);

    Ok(())
}

/// Tests lookup of an unknown uuid.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let found = repo.find_by_uuid(&[9u8; 16]).await?;

    assert!(found.is_none());

    Ok(())
}
