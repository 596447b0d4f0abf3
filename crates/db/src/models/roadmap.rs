use chrono::{DateTime, TimeZone, Utc};
use roadmap_core::StoredRoadmap;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RoadmapRow {
    pub id: i64,
    pub project_name: String,
    pub start_date: String,
    pub end_date: String,
    pub capacity: String,
    pub resources: String,
    pub roadmap_text: String,
    pub generated_by: String,
    pub format: String,
    pub created_at: i64,
}

impl RoadmapRow {
    pub fn into_domain(self) -> StoredRoadmap {
        StoredRoadmap {
            project_name: self.project_name,
            start_date: self.start_date,
            end_date: self.end_date,
            capacity: self.capacity,
            resources: self.resources,
            roadmap_text: self.roadmap_text,
            generated_by: self.generated_by,
            format: self.format,
            created_at: timestamp_to_datetime(self.created_at),
        }
    }
}

fn timestamp_to_datetime(ts: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(ts, 0).unwrap()
}
