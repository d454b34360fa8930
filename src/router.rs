use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{
        account::{info, login, logout, register},
        savedata::{delete_save_data, get_save_data, update_save_data},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/account/register", post(register))
        .route("/api/account/login", post(login))
        .route("/api/account/logout", get(logout))
        .route("/api/account/info", get(info))
        .route("/api/savedata/get", get(get_save_data))
        .route("/api/savedata/update", post(update_save_data))
        .route("/api/savedata/delete", post(delete_save_data))
}
