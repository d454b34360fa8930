use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Account, SystemSaveData};
///
/// let test = TestBuilder::new()
///     .with_table(Account)
///     .with_table(SystemSaveData)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for save-data operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Account
    /// - SystemSaveData
    /// - SessionSaveData
    ///
    /// Use this when testing save-data functionality that doesn't involve auth
    /// sessions. For tests involving the token guard, use `with_auth_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_save_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_save_tables(self) -> Self {
        self.with_table(Account)
            .with_table(SystemSaveData)
            .with_table(SessionSaveData)
    }

    /// Adds all tables required for authenticated request handling.
    ///
    /// This is equivalent to calling `with_save_tables()` followed by
    /// `with_table(Session)`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_auth_tables(self) -> Self {
        self.with_save_tables().with_table(Session)
    }

    /// Builds the configured test context.
    ///
    /// Creates a new test context, establishes the in-memory SQLite connection, and
    /// executes all configured CREATE TABLE statements in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test context ready for use
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
