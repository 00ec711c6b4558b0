//! Rendering boundary for dependency graphs
//!
//! # Modules
//!
//! - [`dot`]: Graphviz DOT text output and optional PNG rendering

pub mod dot;

pub use dot::{RenderError, dot_available, render_dot, render_png, write_dot_file};
