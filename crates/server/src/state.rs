use db::RoadmapRepository;
use gemini::GeminiClient;
use sqlx::SqlitePool;

/// Shared application state. The repository and the Gemini client are
/// injected at construction so tests can point both at fakes.
#[derive(Clone)]
pub struct AppState {
    pub roadmaps: RoadmapRepository,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(pool: SqlitePool, gemini: GeminiClient) -> Self {
        Self {
            roadmaps: RoadmapRepository::new(pool),
            gemini,
        }
    }
}
