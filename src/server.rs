//! HTTP transport: a single `POST /api/analyze` endpoint.
//!
//! The handler validates the submitted URL, delegates to
//! [`AnalysisService`], and serializes the report. Failures surface as
//! `{"message": ...}` bodies via [`AppError`]'s response mapping.

use anyhow::Context;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

use crate::domain::SeoReport;
use crate::error::{AppError, Result};
use crate::service::AnalysisService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AnalysisService>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .with_state(state)
}

/// Binds the listener and serves requests until shutdown.
pub async fn serve(addr: &str) -> anyhow::Result<()> {
    let service = AnalysisService::new()?;
    let state = AppState {
        service: Arc::new(service),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .context("Server error")?;
    Ok(())
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<SeoReport>> {
    let url = parse_target_url(&request.url)?;
    let report = state.service.analyze(&url).await?;
    Ok(Json(report))
}

fn parse_target_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|_| AppError::InvalidUrl(raw.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}
