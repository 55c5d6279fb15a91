//! Board-agnostic core logic for the scrollphat LED matrix
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Growable column framebuffer
//! - Circular window composition and 180° rotation remap
//! - Font lookup and text rendering
//! - Bar graph rendering
//! - Transport error accounting
//! - Display configuration

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod diagnostics;
pub mod font;
pub mod framebuffer;
pub mod render;
pub mod state;
pub mod window;

pub use config::{ConfigError, DisplayConfig};
pub use diagnostics::{ErrorCounter, IO_ERROR_NOTICE, IO_ERROR_THRESHOLD};
pub use font::{Font, GlyphTable};
pub use framebuffer::FrameBuffer;
pub use state::DisplayState;
