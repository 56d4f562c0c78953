pub mod api;
pub mod auth;
pub mod celebration;
pub mod error;
pub mod navigation;
pub mod progress_service;
mod certification_service;
mod note_service;

pub use api::ApiClient;
pub use auth::AuthService;
pub use certification_service::CertificationService;
pub use error::ApiError;
pub use note_service::NoteService;
pub use progress_service::ProgressService;
