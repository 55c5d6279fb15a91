//! Scrollphat Hardware Abstraction Layer
//!
//! This crate defines the bus traits the LED matrix driver is written
//! against. Chip or OS specific crates implement them; the driver never
//! touches a peripheral directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  scrollphat-drivers (Is31fl3730)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  scrollphat-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │ Linux i2c-dev │
//! │   adapters    │       │  / test mocks │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - Register-oriented block writes
//! - [`i2c::I2cOpen`] - Opens a bus on a numbered channel

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key traits at crate root for convenience
pub use i2c::{I2cBus, I2cOpen};
