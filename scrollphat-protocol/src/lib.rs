//! IS31FL3730 Register Protocol
//!
//! This crate defines the register-oriented write protocol spoken by the
//! IS31FL3730 matrix controller on the scrollphat board. The host never
//! reads from the device; every transaction is a register byte followed by
//! a payload:
//!
//! ```text
//! ┌──────────┬──────────────────────────────────────────┐
//! │ REGISTER │ PAYLOAD                                  │
//! │ 1B       │ mode (1B) / brightness (1B) / frame (12B)│
//! └──────────┴──────────────────────────────────────────┘
//! ```
//!
//! A draw frame carries the 11 visible columns followed by the `0xFF`
//! terminator the controller expects after the column data.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;

pub use command::{
    Command, CommandError, DEVICE_ADDRESS, MODE_5X11, REG_BRIGHTNESS, REG_DRAW, REG_MODE,
};
pub use frame::{DrawFrame, FRAME_SIZE, FRAME_TERMINATOR, HEIGHT, WIDTH};
