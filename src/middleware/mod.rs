//! Request/response processing: authentication guard and CORS boundary.

pub mod auth;
pub mod cors;
