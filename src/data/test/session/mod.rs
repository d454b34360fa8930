use crate::data::session::SessionRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::account::create_account};

mod create;
mod delete;
mod find_by_token;
