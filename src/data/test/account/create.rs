use super::*;

/// Tests creating a new account.
///
/// Verifies that the account repository stores a new account row and returns
/// the domain model with the identity fields intact.
///
/// Expected: Ok with uuid and username matching the parameters
#[tokio::test]
async fn creates_new_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let result = repo
        .create(CreateAccountParam {
            uuid: vec![1u8; 16],
            username: "red".to_string(),
            hash: vec![2u8; 32],
            salt: vec![3u8; 16],
        })
        .await;

    assert!(result.is_ok());
    let account = result.unwrap();
    assert_eq!(account.uuid, vec![1u8; 16]);
    assert_eq!(account.username, "red");
    assert!(account.last_logged_in.is_none());
    assert!(account.last_activity.is_none());

    Ok(())
}

/// Tests the unique constraint on usernames.
///
/// Verifies that creating a second account with an existing username fails
/// with a database error instead of silently overwriting the first.
///
/// Expected: Err for the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    repo.create(CreateAccountParam {
        uuid: vec![1u8; 16],
        username: "red".to_string(),
        hash: vec![2u8; 32],
        salt: vec![3u8; 16],
    })
    .await?;

    let result = repo
        .create(CreateAccountParam {
            uuid: vec![4u8; 16],
            username: "red".to_string(),
            hash: vec![5u8; 32],
            salt: vec![6u8; 16],
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
