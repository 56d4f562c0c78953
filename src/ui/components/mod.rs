mod drawer;
mod header;
mod level_item;
mod note_panel;

pub use drawer::ItemDrawer;
pub use header::Header;
pub use level_item::LevelRow;
pub use note_panel::NotePanel;
