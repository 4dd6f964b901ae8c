//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{CamTranslator, TranslationPipeline, Translator};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TranslationPipeline>,
}

/// Create application state with the perceptual translator.
pub fn create_app_state(config: AppConfig) -> AppState {
    create_app_state_with_translator(config, Arc::new(CamTranslator))
}

/// Create application state around any translator.
pub fn create_app_state_with_translator(
    config: AppConfig,
    translator: Arc<dyn Translator>,
) -> AppState {
    AppState {
        pipeline: Arc::new(TranslationPipeline::new(translator, config.max_colors)),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/result", post(handle_result))
        .route("/api/translate", post(handle_translate))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

// Extractor rejections are turned into ApiError so every error body is JSON

async fn handle_result(
    axum::extract::State(state): axum::extract::State<AppState>,
    form: Result<axum::Form<api::TranslateForm>, FormRejection>,
) -> Result<axum::Json<api::TranslateResponse>, ApiError> {
    api::handle_result(axum::extract::State(state.pipeline), form?).await
}

async fn handle_translate(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: Result<axum::Json<api::TranslateRequestBody>, JsonRejection>,
) -> Result<axum::Json<api::TranslateResponse>, ApiError> {
    api::handle_translate(axum::extract::State(state.pipeline), body?).await
}
