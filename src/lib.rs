pub mod config;
pub mod graph;
pub mod registry;
pub mod render;
