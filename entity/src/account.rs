use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Vec<u8>,
    #[sea_orm(unique)]
    pub username: String,
    pub hash: Vec<u8>,
    pub salt: Vec<u8>,
    pub registered_at: DateTimeUtc,
    pub last_logged_in: Option<DateTimeUtc>,
    pub last_activity: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session::Entity")]
    Session,
    #[sea_orm(has_many = "super::session_save_data::Entity")]
    SessionSaveData,
    #[sea_orm(has_one = "super::system_save_data::Entity")]
    SystemSaveData,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::session_save_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionSaveData.def()
    }
}

impl Related<super::system_save_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SystemSaveData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
