pub use sea_orm_migration::prelude::*;

mod m20250914_000001_create_account_table;
mod m20250914_000002_create_session_table;
mod m20250914_000003_create_system_save_data_table;
mod m20250914_000004_create_session_save_data_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250914_000001_create_account_table::Migration),
            Box::new(m20250914_000002_create_session_table::Migration),
            Box::new(m20250914_000003_create_system_save_data_table::Migration),
            Box::new(m20250914_000004_create_session_save_data_table::Migration),
        ]
    }
}
