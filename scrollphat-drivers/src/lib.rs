//! Hardware driver implementations
//!
//! This crate provides the concrete driver for the IS31FL3730 matrix
//! controller and the glue that lets it run on any bus:
//!
//! - [`Is31fl3730`] - framebuffer-backed 11x5 panel driver
//! - [`bus::HalBus`] - register writes over an `embedded-hal` I2C bus
//! - [`bus::Preopened`] - hands an already open bus to the driver

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod bus;
pub mod is31fl3730;

pub use bus::{BusError, HalBus, Preopened};
pub use is31fl3730::{Error, Is31fl3730};
