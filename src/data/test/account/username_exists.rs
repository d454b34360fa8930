use super::*;

/// Tests detection of an existing username.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_account(db).await?;

    let repo = AccountRepository::new(db);
    let exists = repo.username_exists(&created.username).await?;

    assert!(exists);

    Ok(())
}

/// Tests detection of a free username.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let exists = repo.username_exists("nobody").await?;

    assert!(!exists);

    Ok(())
}
