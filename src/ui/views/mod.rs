mod certification_view;
mod guide_view;
mod home_view;
mod roadmap_view;

pub use certification_view::CertificationView;
pub use guide_view::GuideView;
pub use home_view::HomeView;
pub use roadmap_view::RoadmapView;
