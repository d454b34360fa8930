use crate::{data::account::AccountRepository, model::account::CreateAccountParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::account::create_account};

mod create;
mod find_by_username;
mod find_by_uuid;
mod update_last_activity;
mod update_last_logged_in;
mod username_exists;
