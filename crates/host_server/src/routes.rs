//! HTTP routes and router assembly for the server host.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    app::App,
    config::Interactivity,
    middleware::{antiforgery, https_redirect},
    render::{render_page, Page},
};

/// Builds the application router with the standard middleware pipeline.
pub fn router(app: Arc<App>) -> Router {
    let mut router = Router::new()
        .route("/", get(home))
        .route("/counter", get(counter))
        .route("/device", get(device))
        .route("/error", get(error_page))
        .nest_service("/assets", ServeDir::new(&app.config.static_dir));

    if app.config.interactivity == Interactivity::ServerAndWasm {
        router = router.nest_service("/pkg", ServeDir::new(&app.config.wasm_dir));
    }

    router
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(app.clone(), antiforgery))
        .layer(middleware::from_fn_with_state(app.clone(), https_redirect))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

async fn home(State(app): State<Arc<App>>) -> Html<String> {
    Html(render_page(&app, Page::Home))
}

async fn counter(State(app): State<Arc<App>>) -> Html<String> {
    Html(render_page(&app, Page::Counter))
}

async fn device(State(app): State<Arc<App>>) -> Html<String> {
    Html(render_page(&app, Page::Device))
}

async fn error_page(State(app): State<Arc<App>>) -> Html<String> {
    Html(render_page(&app, Page::Error))
}

/// Unmatched routes: diagnostic 404 in development, error page otherwise.
async fn fallback(State(app): State<Arc<App>>, uri: Uri) -> Response {
    if app.config.environment.is_development() {
        (StatusCode::NOT_FOUND, format!("no route for {uri}")).into_response()
    } else {
        (StatusCode::NOT_FOUND, Html(render_page(&app, Page::Error))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Environment, ServerConfig};
    use crate::middleware::ANTIFORGERY_HEADER;

    fn test_app(environment: Environment, interactivity: Interactivity) -> Arc<App> {
        let mut config = ServerConfig::from_env().expect("config");
        config.environment = environment;
        config.interactivity = interactivity;
        Arc::new(App::new(config))
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf8 body")
    }

    #[tokio::test]
    async fn mapped_routes_return_server_rendered_html() {
        let router = router(test_app(Environment::Development, Interactivity::ServerOnly));
        for path in ["/", "/counter", "/device", "/error"] {
            let response = router
                .clone()
                .oneshot(Request::get(path).body(Body::empty()).expect("request"))
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::OK, "path {path}");
            let html = body_text(response).await;
            assert!(html.starts_with("<!DOCTYPE html>"), "path {path}");
        }
    }

    #[tokio::test]
    async fn safe_responses_carry_the_antiforgery_cookie() {
        let router = router(test_app(Environment::Development, Interactivity::ServerOnly));
        let response = router
            .oneshot(Request::get("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .expect("set-cookie header");
        assert!(cookie.starts_with("app.antiforgery="));
    }

    #[tokio::test]
    async fn state_changing_requests_without_the_token_are_rejected() {
        let app = test_app(Environment::Development, Interactivity::ServerOnly);
        let router = router(app.clone());

        let rejected = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(rejected.status(), StatusCode::FORBIDDEN);

        // With the echoed token the guard passes; the route itself has no POST
        // handler, so routing answers instead of the guard.
        let passed = router
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .header(ANTIFORGERY_HEADER, app.antiforgery.token.clone())
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(passed.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unmatched_routes_render_the_error_page_outside_development() {
        let router = router(test_app(Environment::Production, Interactivity::ServerOnly));
        let response = router
            .oneshot(
                Request::get("/no-such-route")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("An error occurred while processing your request."));
    }

    #[tokio::test]
    async fn unmatched_routes_stay_diagnostic_in_development() {
        let router = router(test_app(Environment::Development, Interactivity::ServerOnly));
        let response = router
            .oneshot(
                Request::get("/no-such-route")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let text = body_text(response).await;
        assert!(text.contains("/no-such-route"));
    }

    #[tokio::test]
    async fn forwarded_http_requests_redirect_outside_development() {
        let router = router(test_app(Environment::Production, Interactivity::ServerOnly));
        let response = router
            .oneshot(
                Request::get("/counter")
                    .header("x-forwarded-proto", "http")
                    .header(header::HOST, "app.example.com")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("https://app.example.com/counter")
        );
    }

    #[tokio::test]
    async fn wasm_bundle_route_exists_only_for_the_wasm_composition() {
        let server_only = router(test_app(Environment::Development, Interactivity::ServerOnly));
        let response = server_only
            .oneshot(
                Request::get("/pkg/browser_app.js")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        // Without the wasm composition /pkg is unrouted and falls through.
        let text = body_text(response).await;
        assert!(text.contains("/pkg/browser_app.js"));
    }
}
