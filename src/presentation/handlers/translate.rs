use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::application::services::{AudioAttachment, UploadRequest};
use crate::presentation::state::AppState;

use super::error::ApiError;

const FILE_FIELD: &str = "file";
const INPUT_LANGUAGE_FIELD: &str = "inputLanguage";
const OUTPUT_LANGUAGE_FIELD: &str = "outputLanguage";

#[derive(Serialize)]
pub struct TranslationResponse {
    pub url: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn translate_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let request = read_upload_request(multipart).await?;

    tracing::debug!(
        has_file = request.file.is_some(),
        input_language = %request.input_language,
        output_language = %request.output_language,
        "Translation request received"
    );

    let result = state.pipeline.run(request).await?;

    Ok(Json(TranslationResponse {
        url: result.download_url,
    }))
}

async fn read_upload_request(mut multipart: Multipart) -> Result<UploadRequest, ApiError> {
    let mut request = UploadRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            FILE_FIELD if request.file.is_some() => {
                tracing::debug!("Ignoring additional file part");
            }
            FILE_FIELD => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
                request.file = Some(AudioAttachment {
                    filename,
                    content_type,
                    bytes,
                });
            }
            INPUT_LANGUAGE_FIELD => request.input_language = read_text(field).await?,
            OUTPUT_LANGUAGE_FIELD => request.output_language = read_text(field).await?,
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    Ok(request)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read form field: {}", e)))
}
