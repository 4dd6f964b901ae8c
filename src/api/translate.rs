use axum::{extract::State, response::Json, Form};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::TranslationRequest;
use crate::services::{TranslationOutput, TranslationPipeline};

/// Form posted by the translation page
///
/// Factors arrive as the text the user typed.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TranslateForm {
    /// Lightness contrast factor
    #[serde(rename = "J_factor")]
    pub j_factor: String,
    /// Colorfulness factor
    #[serde(rename = "M_factor")]
    pub m_factor: String,
    /// "to_dark" or "to_light"
    pub direction: String,
    /// One color per line, hex or decimal
    #[serde(default)]
    pub colors: String,
}

/// JSON request body for translation
#[derive(Debug, Deserialize, ToSchema)]
pub struct TranslateRequestBody {
    /// Lightness contrast factor (default 1.0)
    #[serde(default = "default_factor")]
    pub j_factor: f64,
    /// Colorfulness factor (default 1.0)
    #[serde(default = "default_factor")]
    pub m_factor: f64,
    /// "to_dark" or "to_light"
    pub direction: String,
    /// One color per line, hex or decimal
    pub colors: String,
}

fn default_factor() -> f64 {
    1.0
}

/// One translated row in the input's notation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ColorPair {
    pub source: String,
    pub destination: String,
}

/// Translation result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TranslateResponse {
    /// Background behind the source swatches
    pub left_bg: String,
    /// Background behind the destination swatches
    pub right_bg: String,
    /// Source/destination pairs, in input order
    pub outputs: Vec<ColorPair>,
    /// Destination colors only, one per line
    pub text: String,
    /// CSV table of integer channels
    pub csv: String,
}

impl From<TranslationOutput> for TranslateResponse {
    fn from(output: TranslationOutput) -> Self {
        Self {
            left_bg: output.left_bg.to_string(),
            right_bg: output.right_bg.to_string(),
            outputs: output
                .pairs
                .into_iter()
                .map(|pair| ColorPair {
                    source: pair.source,
                    destination: pair.destination,
                })
                .collect(),
            text: output.dump,
            csv: output.csv,
        }
    }
}

/// Translate a form submission
///
/// Accepts the same fields as the translation page form.
#[utoipa::path(
    post,
    path = "/result",
    request_body(content = TranslateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Colors translated", body = TranslateResponse),
        (status = 400, description = "Malformed color, factor or direction, or no colors"),
        (status = 429, description = "More colors than the per-request limit"),
    ),
    tag = "Translation"
)]
pub async fn handle_result(
    State(pipeline): State<Arc<TranslationPipeline>>,
    Form(form): Form<TranslateForm>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let j_factor = parse_factor("J_factor", &form.j_factor)?;
    let m_factor = parse_factor("M_factor", &form.m_factor)?;
    let request = TranslationRequest::new(&form.direction, j_factor, m_factor, form.colors)?;

    run_pipeline(pipeline, request).await.map(Json)
}

/// Translate a JSON request
#[utoipa::path(
    post,
    path = "/api/translate",
    request_body = TranslateRequestBody,
    responses(
        (status = 200, description = "Colors translated", body = TranslateResponse),
        (status = 400, description = "Malformed color or direction, or no colors"),
        (status = 429, description = "More colors than the per-request limit"),
    ),
    tag = "Translation"
)]
pub async fn handle_translate(
    State(pipeline): State<Arc<TranslationPipeline>>,
    Json(body): Json<TranslateRequestBody>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let j_factor = check_finite("j_factor", body.j_factor)?;
    let m_factor = check_finite("m_factor", body.m_factor)?;
    let request = TranslationRequest::new(&body.direction, j_factor, m_factor, body.colors)?;

    run_pipeline(pipeline, request).await.map(Json)
}

/// Run the pipeline off the async runtime.
async fn run_pipeline(
    pipeline: Arc<TranslationPipeline>,
    request: TranslationRequest,
) -> Result<TranslateResponse, ApiError> {
    let output = tokio::task::spawn_blocking(move || pipeline.process(&request))
        .await
        .map_err(|e| ApiError::Internal(format!("Translation task failed: {e}")))??;

    Ok(output.into())
}

fn parse_factor(field: &'static str, value: &str) -> Result<f64, ApiError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ApiError::InvalidFactor {
            field,
            value: value.to_string(),
        })
}

fn check_finite(field: &'static str, value: f64) -> Result<f64, ApiError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApiError::InvalidFactor {
            field,
            value: value.to_string(),
        })
    }
}
