mod roadmap;

pub use roadmap::RoadmapRow;
