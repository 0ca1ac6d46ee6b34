//! HTTP serving boundary
//!
//! Exposes the extraction pipeline as `GET /logo?url=<target>`. The handler
//! is a thin translation layer: it validates the query parameter, runs the
//! pipeline, and maps the three possible outcomes to status codes. Absence
//! of a logo and a hard pipeline failure are deliberately distinct (400 vs
//! 500), each with a plain-text message.

use crate::extract::extract_logo;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use reqwest::Client;
use serde::Deserialize;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

/// Shared handler state: just the HTTP client (internally reference-counted)
#[derive(Clone)]
pub struct AppState {
    client: Client,
}

/// Query parameters of the /logo endpoint
#[derive(Debug, Deserialize)]
pub struct LogoParams {
    url: Option<String>,
}

/// Builds the application router
///
/// Cross-origin access is restricted to the single `allowed_origin` and the
/// GET method only. An origin that fails to parse as a header value falls
/// back to an empty CORS layer, which permits no cross-origin caller.
///
/// # Arguments
///
/// * `client` - The HTTP client used by the pipeline
/// * `allowed_origin` - The single origin allowed by CORS
pub fn router(client: Client, allowed_origin: &str) -> Router {
    let cors = match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET]),
        Err(_) => {
            tracing::warn!(
                "allowed origin {:?} is not a valid header value; cross-origin requests will be rejected",
                allowed_origin
            );
            CorsLayer::new().allow_methods([Method::GET])
        }
    };

    Router::new()
        .route("/logo", get(logo_handler))
        .layer(cors)
        .with_state(AppState { client })
}

/// Starts the server on the given port
pub async fn serve(port: u16, client: Client, allowed_origin: &str) -> anyhow::Result<()> {
    let app = router(client, allowed_origin);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Handles `GET /logo?url=<target>`
///
/// Outcome mapping:
/// - missing/empty `url` → 400 before any network call
/// - artifact produced → 200 with the artifact's content type
/// - pipeline completed without a logo → 400 (distinct message)
/// - fetch/resolve hard failure → 500 with a plain-text diagnostic
async fn logo_handler(State(state): State<AppState>, Query(params): Query<LogoParams>) -> Response {
    let url = match params.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => {
            return (StatusCode::BAD_REQUEST, "Invalid url to extract logo").into_response();
        }
    };

    match extract_logo(&state.client, url).await {
        Ok(Some(artifact)) => {
            let content_type = HeaderValue::from_str(&artifact.content_type)
                .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type)],
                artifact.content,
            )
                .into_response()
        }
        Ok(None) => (StatusCode::BAD_REQUEST, "Logo couldn't be extracted").into_response(),
        Err(e) => {
            tracing::error!("logo extraction for {} failed at {} stage: {}", url, e.stage(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching or sending image",
            )
                .into_response()
        }
    }
}
