pub mod content;
pub mod events;
