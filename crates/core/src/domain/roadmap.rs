use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Capacity;

/// Attribution stamped on every stored roadmap, regardless of caller input.
pub const GENERATED_BY: &str = "Gemini AI";

/// Storage format stamped on every stored roadmap.
pub const ROADMAP_FORMAT: &str = "plain-text";

/// Request body for persisting a finalized roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
pub struct SaveRoadmapRequest {
    pub project_name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub capacity: Capacity,
    pub resources: String,
    #[serde(rename = "roadmapText")]
    pub roadmap_text: String,
}

/// A persisted roadmap record. Created once per save action; never updated
/// or deleted. Repeated saves of the same payload create duplicate records.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoredRoadmap {
    pub project_name: String,
    pub start_date: String,
    pub end_date: String,
    pub capacity: String,
    pub resources: String,
    #[serde(rename = "roadmapText")]
    pub roadmap_text: String,
    #[serde(rename = "generatedBy")]
    pub generated_by: String,
    pub format: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl StoredRoadmap {
    /// Build the record to persist, stamping the attribution constants and
    /// the creation timestamp. Caller-supplied values for `generatedBy` or
    /// `format` never reach storage.
    pub fn new(request: SaveRoadmapRequest) -> Self {
        Self {
            project_name: request.project_name,
            start_date: request.start_date,
            end_date: request.end_date,
            capacity: request.capacity.to_string(),
            resources: request.resources,
            roadmap_text: request.roadmap_text,
            generated_by: GENERATED_BY.to_string(),
            format: ROADMAP_FORMAT.to_string(),
            created_at: Utc::now(),
        }
    }
}
