pub mod inject;
pub mod list;
pub mod progress;
pub mod render;
