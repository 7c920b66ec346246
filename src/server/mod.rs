use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use uuid::Uuid;

use crate::archive;
use crate::config::Config;
use crate::errors::ApiError;
use crate::provider::DynProvider;
use crate::wire;

const USER_AVATAR: &str = "/static/avatar/user.png";
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Immutable per-process state injected into the handlers. The provider
/// is selected once at startup; `None` means the service runs
/// unconfigured and every generation request fails before any outbound
/// call.
pub struct AppState {
    pub provider: Option<DynProvider>,
    pub config: Config,
    pub save_exchanges: bool,
}

impl AppState {
    fn bot_avatar(&self) -> String {
        match &self.provider {
            Some(p) => format!("/static/avatar/{}.png", p.name()),
            None => String::new(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// A missing key and an empty string are the same thing: no prompt.
    #[serde(default)]
    pub prompt: String,
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = INDEX_TEMPLATE
        .replace("{{bot_avatar}}", &state.bot_avatar())
        .replace("{{user_avatar}}", USER_AVATAR);
    Html(page)
}

/// validate -> invoke-provider -> parse-and-package -> respond.
/// All-or-nothing per request; any failure yields the JSON error body
/// instead of a download.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Response, ApiError> {
    if req.prompt.is_empty() {
        return Err(ApiError::EmptyPrompt);
    }
    let provider = state.provider.as_ref().ok_or(ApiError::NotConfigured)?;

    let request_id = Uuid::new_v4();
    tracing::debug!(%request_id, provider = provider.name(), "dispatching generation request");

    let raw = provider.generate(&req.prompt).await?;

    if state.save_exchanges {
        let root = Path::new(&state.config.artifacts_root);
        if let Err(e) =
            crate::log::save_exchange(root, request_id, provider.name(), &req.prompt, &raw)
        {
            tracing::warn!(%request_id, "failed to save exchange artifacts: {e:#}");
        }
    }

    let bundle = wire::parse_bundle(&raw)?;
    let name = wire::sanitize_name(&bundle.name);
    let payload = archive::build(&bundle.files)?;

    tracing::info!(
        %request_id,
        name = %name,
        files = bundle.files.len(),
        bytes = payload.len(),
        "bundle packaged"
    );

    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{name}.zip\""),
        ),
    ];
    Ok((StatusCode::OK, headers, Bytes::from(payload)).into_response())
}
