pub mod graph;
pub mod messages;
pub mod render;
pub mod state;
