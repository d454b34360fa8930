//! CORS boundary applied ahead of routing.
//!
//! Two mutually exclusive policies, selected once at startup by the debug
//! flag. Both answer every `OPTIONS` request directly with `200 OK` so
//! preflights never reach the router, and both stamp the same fixed headers
//! on every response. The production allow-origin value is a constant; it is
//! never reflected from the request.

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Origin allowed to call the API under the production policy.
pub const ALLOWED_ORIGIN: &str = "https://play.savepoint.gg";

const ALLOWED_HEADERS: &str = "Authorization, Content-Type";
const ALLOWED_METHODS: &str = "OPTIONS, GET, POST";
const WILDCARD: &str = "*";

/// Production CORS policy: one fixed origin, fixed headers and methods.
pub async fn production(request: Request, next: Next) -> Response {
    handle(request, next, ALLOWED_HEADERS, ALLOWED_METHODS, ALLOWED_ORIGIN).await
}

/// Debug CORS policy: any origin, any header, any method.
pub async fn debug(request: Request, next: Next) -> Response {
    handle(request, next, WILDCARD, WILDCARD, WILDCARD).await
}

async fn handle(
    request: Request,
    next: Next,
    allow_headers: &'static str,
    allow_methods: &'static str,
    allow_origin: &'static str,
) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(allow_headers),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(allow_methods),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(allow_origin),
    );

    response
}
