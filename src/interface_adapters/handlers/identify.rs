use crate::domain::{IdentificationResult, IdentifyError};
use crate::interface_adapters::protocol::{ErrorResponse, IdentifyRequest};
use crate::interface_adapters::state::AppState;
use crate::use_cases::IdentifyPlantUseCase;
use axum::extract::rejection::JsonRejection;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

const MISSING_IMAGE_MESSAGE: &str = "Image data is required";
const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to process the image";
const INVALID_BODY_MESSAGE: &str = "Invalid request body";

// Forward an image to the identification service and return the simplified result.
#[tracing::instrument(
    name = "identify",
    skip_all,
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn identify(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<IdentifyRequest>, JsonRejection>,
) -> Result<Json<IdentificationResult>, (StatusCode, Json<ErrorResponse>)> {
    // Keep the rejection's status (413 for oversized bodies) but use our envelope.
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "rejected identify payload.");
        error_response(rejection.status(), INVALID_BODY_MESSAGE)
    })?;

    let use_case = IdentifyPlantUseCase {
        identifier: state.identifier.clone(),
    };

    let result = use_case
        .execute(body.base64_image)
        .await
        .map_err(map_identify_error)?;

    tracing::info!(confidence = %result.confidence, "plant identified.");

    Ok(Json(result))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// Upstream detail is logged here and never echoed to the caller.
fn map_identify_error(err: IdentifyError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        IdentifyError::MissingInput => {
            tracing::warn!("identify request without image data.");
            error_response(StatusCode::BAD_REQUEST, MISSING_IMAGE_MESSAGE)
        }
        IdentifyError::UpstreamFailure(detail) => {
            tracing::error!(error = %detail, "failed to identify plant.");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE_MESSAGE)
        }
    }
}
