use super::*;

/// Tests finding an account by username.
///
/// Verifies that the lookup returns the entity model including the stored
/// credential material needed by the login flow.
///
/// Expected: Ok(Some) with hash and salt present
#[tokio::test]
async fn returns_entity_with_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_account(db).await?;

    let repo = AccountRepository::new(db);
    let found = repo.find_by_username(&created.username).await?;

    assert!(found.is_some());
    let entity = found.unwrap();
    assert_eq!(entity.uuid, created.uuid);
    assert_eq!(entity.hash.len(), 32);
    assert_eq!(entity.salt.len(), 16);

    Ok(())
}

/// Tests lookup of an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let found = repo.find_by_username("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
