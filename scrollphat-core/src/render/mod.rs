//! Renderers that draw into the framebuffer
//!
//! Renderers only write columns; pushing the result to the panel is the
//! driver's job.

pub mod graph;
pub mod text;

pub use graph::{fill_bits, graph, scale};
pub use text::{text_width, write_string, BLANK_WIDTH};
