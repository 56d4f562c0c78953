pub mod certification;
pub mod note;
pub mod roadmap;
pub mod user;
