//! Request pipeline middleware: anti-forgery guard and HTTPS redirect.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::app::App;

/// Cookie carrying the anti-forgery token to clients.
pub const ANTIFORGERY_COOKIE: &str = "app.antiforgery";
/// Header clients must echo on state-changing requests.
pub const ANTIFORGERY_HEADER: &str = "x-antiforgery-token";

const SAFE_METHODS: [Method; 3] = [Method::GET, Method::HEAD, Method::OPTIONS];

/// Double-submit anti-forgery guard.
///
/// Safe methods receive the token cookie; state-changing methods must echo the
/// token in [`ANTIFORGERY_HEADER`] or are rejected with `403`.
pub async fn antiforgery(
    State(app): State<Arc<App>>,
    request: Request,
    next: Next,
) -> Response {
    let safe = SAFE_METHODS.contains(request.method());
    if !safe {
        let presented = request
            .headers()
            .get(ANTIFORGERY_HEADER)
            .and_then(|value| value.to_str().ok());
        if presented != Some(app.antiforgery.token.as_str()) {
            tracing::debug!(method = %request.method(), uri = %request.uri(), "anti-forgery rejection");
            return StatusCode::FORBIDDEN.into_response();
        }
    }

    let mut response = next.run(request).await;
    if safe {
        let cookie = format!(
            "{ANTIFORGERY_COOKIE}={}; Path=/; SameSite=Strict; HttpOnly",
            app.antiforgery.token
        );
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    response
}

/// Redirects forwarded plain-HTTP requests to HTTPS outside development.
///
/// TLS itself terminates upstream; this only honors the `x-forwarded-proto`
/// marker the terminator sets.
pub async fn https_redirect(
    State(app): State<Arc<App>>,
    request: Request,
    next: Next,
) -> Response {
    if app.config.environment.is_development() {
        return next.run(request).await;
    }

    let forwarded = request
        .headers()
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok());
    if forwarded == Some("http") {
        if let Some(host) = request
            .headers()
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
        {
            let path = request
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("/");
            return Redirect::permanent(&format!("https://{host}{path}")).into_response();
        }
    }
    next.run(request).await
}
