//! Register commands for the IS31FL3730
//!
//! Every host transaction targets one register:
//! - MODE (0x00): configuration register, selects matrix geometry
//! - DRAW (0x01): matrix 1 column data, followed by the frame terminator
//! - BRIGHTNESS (0x19): lighting effect / PWM level

use crate::frame::{DrawFrame, FRAME_SIZE};
use heapless::Vec;

/// Fixed 7-bit bus address of the controller
pub const DEVICE_ADDRESS: u8 = 0x60;

// Register addresses
pub const REG_MODE: u8 = 0x00;
pub const REG_DRAW: u8 = 0x01;
pub const REG_BRIGHTNESS: u8 = 0x19;

/// Configuration value for a single 5x11 matrix
pub const MODE_5X11: u8 = 0b0000_0011;

/// Errors that can occur while encoding or decoding commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Payload exceeds the largest register payload
    PayloadTooLarge,
    /// Payload length does not match the register
    InvalidLength,
    /// Draw payload does not end in the frame terminator
    MissingTerminator,
    /// Register is not one the driver writes
    UnknownRegister,
}

/// A single register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Select the display geometry mode
    SetMode(u8),
    /// Set global brightness
    SetBrightness(u8),
    /// Push the visible window
    Draw(DrawFrame),
}

impl Command {
    /// Register this command is written to
    pub fn register(&self) -> u8 {
        match self {
            Command::SetMode(_) => REG_MODE,
            Command::SetBrightness(_) => REG_BRIGHTNESS,
            Command::Draw(_) => REG_DRAW,
        }
    }

    /// Payload bytes written after the register
    pub fn payload(&self) -> Vec<u8, FRAME_SIZE> {
        let mut payload = Vec::new();
        match self {
            Command::SetMode(mode) => {
                let _ = payload.push(*mode);
            }
            Command::SetBrightness(level) => {
                let _ = payload.push(*level);
            }
            // A frame is exactly FRAME_SIZE bytes, the capacity of `payload`
            Command::Draw(frame) => {
                let _ = payload.extend_from_slice(frame.as_bytes());
            }
        }
        payload
    }

    /// Parse a command from a register write (for testing or simulation)
    pub fn decode(register: u8, payload: &[u8]) -> Result<Self, CommandError> {
        if payload.len() > FRAME_SIZE {
            return Err(CommandError::PayloadTooLarge);
        }

        match register {
            REG_MODE => match payload {
                [mode] => Ok(Command::SetMode(*mode)),
                _ => Err(CommandError::InvalidLength),
            },
            REG_BRIGHTNESS => match payload {
                [level] => Ok(Command::SetBrightness(*level)),
                _ => Err(CommandError::InvalidLength),
            },
            REG_DRAW => {
                if payload.len() != FRAME_SIZE {
                    return Err(CommandError::InvalidLength);
                }
                DrawFrame::from_bytes(payload)
                    .map(Command::Draw)
                    .ok_or(CommandError::MissingTerminator)
            }
            _ => Err(CommandError::UnknownRegister),
        }
    }
}
