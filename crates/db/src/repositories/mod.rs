mod roadmap_repository;

pub use roadmap_repository::RoadmapRepository;
