use std::str::FromStr;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::CaptionFormat;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct GenerateCaptionsRequest {
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateCaptionsResponse {
    pub message: String,
    pub content: String,
    pub format: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_captions_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateCaptionsRequest>,
) -> impl IntoResponse {
    if request.source_url.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "source_url is required".to_string(),
            }),
        )
            .into_response();
    }

    let format = match request.format.as_deref() {
        None => CaptionFormat::default(),
        Some(raw) => match CaptionFormat::from_str(raw) {
            Ok(format) => format,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected caption request");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                )
                    .into_response();
            }
        },
    };

    let engine = match state.settings.pool.lease_timeout {
        Some(deadline) => match state.engine_pool.lease_with_deadline(deadline).await {
            Ok(lease) => lease,
            Err(e) => {
                tracing::warn!(error = %e, "Lease deadline exceeded");
                return (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorResponse {
                        error: e.to_string(),
                    }),
                )
                    .into_response();
            }
        },
        None => state.engine_pool.lease().await,
    };

    match engine.generate(&request.source_url, format).await {
        Ok(output) => {
            tracing::info!(format = %output.format, "Caption request succeeded");
            (
                StatusCode::OK,
                Json(GenerateCaptionsResponse {
                    message: "Captions generated successfully".to_string(),
                    content: output.content,
                    format: output.format.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Caption request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
