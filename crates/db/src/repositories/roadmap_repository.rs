use crate::error::DbError;
use crate::models::RoadmapRow;
use roadmap_core::StoredRoadmap;
use sqlx::SqlitePool;
use tracing::debug;

/// Insert-only access to the roadmaps table. No update, no delete, no
/// uniqueness constraint: repeated saves create duplicate records.
#[derive(Clone)]
pub struct RoadmapRepository {
    pool: SqlitePool,
}

impl RoadmapRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, roadmap: &StoredRoadmap) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO roadmaps (project_name, start_date, end_date, capacity, resources, roadmap_text, generated_by, format, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&roadmap.project_name)
        .bind(&roadmap.start_date)
        .bind(&roadmap.end_date)
        .bind(&roadmap.capacity)
        .bind(&roadmap.resources)
        .bind(&roadmap.roadmap_text)
        .bind(&roadmap.generated_by)
        .bind(&roadmap.format)
        .bind(roadmap.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        debug!(project_name = %roadmap.project_name, "Inserted roadmap record");

        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<StoredRoadmap>, DbError> {
        let rows: Vec<RoadmapRow> = sqlx::query_as(
            r#"
            SELECT id, project_name, start_date, end_date, capacity, resources, roadmap_text, generated_by, format, created_at
            FROM roadmaps
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_domain()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};
    use chrono::{TimeZone, Utc};
    use roadmap_core::{SaveRoadmapRequest, StoredRoadmap};

    async fn setup_test_db() -> SqlitePool {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    fn sample_record(project_name: &str, created_secs: i64) -> StoredRoadmap {
        StoredRoadmap {
            project_name: project_name.to_string(),
            start_date: "2026-01-01".to_string(),
            end_date: "2026-03-01".to_string(),
            capacity: "5".to_string(),
            resources: "Alice, Bob".to_string(),
            roadmap_text: "Phase 1: Planning".to_string(),
            generated_by: "Gemini AI".to_string(),
            format: "plain-text".to_string(),
            created_at: Utc.timestamp_opt(created_secs, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_all() {
        let pool = setup_test_db().await;
        let repo = RoadmapRepository::new(pool);

        let stored = StoredRoadmap::new(SaveRoadmapRequest {
            project_name: "Acme".to_string(),
            start_date: "2026-01-01".to_string(),
            end_date: "2026-02-01".to_string(),
            resources: "Alice".to_string(),
            roadmap_text: "Phase 1".to_string(),
            ..Default::default()
        });
        repo.insert(&stored).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].project_name, "Acme");
        assert_eq!(all[0].generated_by, "Gemini AI");
        assert_eq!(all[0].format, "plain-text");
    }

    #[tokio::test]
    async fn test_duplicate_inserts_create_duplicate_records() {
        let pool = setup_test_db().await;
        let repo = RoadmapRepository::new(pool);

        let record = sample_record("Acme", 1_700_000_000);
        repo.insert(&record).await.unwrap();
        repo.insert(&record).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_find_all_returns_newest_first() {
        let pool = setup_test_db().await;
        let repo = RoadmapRepository::new(pool);

        repo.insert(&sample_record("older", 1_700_000_000))
            .await
            .unwrap();
        repo.insert(&sample_record("newer", 1_700_000_100))
            .await
            .unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all[0].project_name, "newer");
        assert_eq!(all[1].project_name, "older");
    }
}
