use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a new login session.
    ///
    /// # Arguments
    /// - `token`: Hex-encoded session token (primary key)
    /// - `uuid`: Account the session belongs to
    /// - `expires_at`: When the session stops being valid
    ///
    /// # Returns
    /// - `Ok(())`: Session stored
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        token: &str,
        uuid: &[u8],
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::session::ActiveModel {
            token: ActiveValue::Set(token.to_string()),
            uuid: ActiveValue::Set(uuid.to_vec()),
            expires_at: ActiveValue::Set(expires_at),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Looks up a session by its token.
    ///
    /// Expiry is not checked here; the token guard compares the returned
    /// expiry against the current time.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<entity::session::Model>, DbErr> {
        entity::prelude::Session::find_by_id(token.to_string())
            .one(self.db)
            .await
    }

    /// Deletes a session by its token. Deleting an absent session is not an
    /// error.
    pub async fn delete(&self, token: &str) -> Result<(), DbErr> {
        entity::prelude::Session::delete_many()
            .filter(entity::session::Column::Token.eq(token))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
