pub use super::account::Entity as Account;
pub use super::session::Entity as Session;
pub use super::session_save_data::Entity as SessionSaveData;
pub use super::system_save_data::Entity as SystemSaveData;
