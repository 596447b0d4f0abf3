use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use gemini::first_candidate_text;
use roadmap_core::{
    build_prompt, roadmap_lines, RoadmapRequest, SaveRoadmapRequest, StoredRoadmap,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateRoadmapResponse {
    pub message: String,
    /// Raw Gemini completion, passed through unmodified.
    #[schema(value_type = Object)]
    pub roadmap: serde_json::Value,
    /// First candidate's text as filtered display lines.
    pub lines: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/roadmap-generator",
    request_body = RoadmapRequest,
    responses(
        (status = 200, description = "Roadmap generated", body = GenerateRoadmapResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Gemini request failed")
    ),
    tag = "roadmap"
)]
pub async fn generate_roadmap(
    State(state): State<AppState>,
    Json(payload): Json<RoadmapRequest>,
) -> Result<Json<GenerateRoadmapResponse>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let prompt = build_prompt(&payload);
    let completion = state.gemini.generate(&prompt).await?;

    let lines = first_candidate_text(&completion)
        .map(|text| roadmap_lines(&text))
        .unwrap_or_default();

    info!(
        project_name = %payload.project_name,
        lines = lines.len(),
        "Roadmap generated"
    );

    Ok(Json(GenerateRoadmapResponse {
        message: "Roadmap successfully generated by Gemini AI.".to_string(),
        roadmap: completion,
        lines,
    }))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveRoadmapResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/save-roadmap",
    request_body = SaveRoadmapRequest,
    responses(
        (status = 200, description = "Roadmap saved", body = SaveRoadmapResponse),
        (status = 500, description = "Write failed")
    ),
    tag = "roadmap"
)]
pub async fn save_roadmap(
    State(state): State<AppState>,
    Json(payload): Json<SaveRoadmapRequest>,
) -> Result<Json<SaveRoadmapResponse>, AppError> {
    let record = StoredRoadmap::new(payload);

    state.roadmaps.insert(&record).await.map_err(|e| {
        error!(error = %e, "Failed to insert roadmap");
        AppError::Internal("Failed to save roadmap".to_string())
    })?;

    info!(project_name = %record.project_name, "Roadmap saved");

    Ok(Json(SaveRoadmapResponse {
        message: "Roadmap saved successfully".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/roadmaps",
    responses(
        (status = 200, description = "Stored roadmaps, newest first", body = [StoredRoadmap]),
        (status = 500, description = "Read failed")
    ),
    tag = "roadmap"
)]
pub async fn list_roadmaps(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredRoadmap>>, AppError> {
    let roadmaps = state.roadmaps.find_all().await.map_err(|e| {
        error!(error = %e, "Failed to load roadmaps");
        AppError::Internal("Failed to load roadmaps".to_string())
    })?;

    Ok(Json(roadmaps))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DownloadRequest {
    #[serde(rename = "roadmapText", default)]
    pub roadmap_text: String,
    #[serde(default)]
    pub project_name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/download",
    request_body = DownloadRequest,
    responses(
        (status = 200, description = "Roadmap as a plain-text attachment"),
        (status = 400, description = "No roadmap text supplied")
    ),
    tag = "roadmap"
)]
pub async fn download_roadmap(Json(payload): Json<DownloadRequest>) -> Response {
    if payload.roadmap_text.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "No roadmap provided").into_response();
    }

    let filename = match payload
        .project_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
    {
        Some(name) => format!("{}_roadmap.txt", name),
        None => "roadmap.txt".to_string(),
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        payload.roadmap_text,
    )
        .into_response()
}
