mod content;
mod events;
mod health;

pub use content::{get_page, list_pages, patch_component};
pub use events::{get_events, put_events};
pub use health::health_handler;
