//! Bus glue
//!
//! Adapts `embedded-hal` I2C peripherals to the register-write bus the
//! driver is written against.

use embedded_hal::i2c::I2c;
use heapless::Vec;
use scrollphat_hal::{I2cBus, I2cOpen};

/// Largest data block in one register write (SMBus block limit)
pub const MAX_BLOCK_LEN: usize = 32;

/// Register byte plus data block
const MAX_WRITE_LEN: usize = MAX_BLOCK_LEN + 1;

/// Errors from [`HalBus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError<E> {
    /// The underlying I2C transfer failed
    Bus(E),
    /// Data exceeds [`MAX_BLOCK_LEN`]
    BlockTooLong,
}

/// Register writes over an `embedded-hal` I2C bus
#[derive(Debug)]
pub struct HalBus<I> {
    i2c: I,
}

impl<I> HalBus<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Releases the owned bus
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> I2cBus for HalBus<I> {
    type Error = BusError<I::Error>;

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut packet = Vec::<u8, MAX_WRITE_LEN>::new();
        packet
            .push(register)
            .map_err(|_| BusError::BlockTooLong)?;
        packet
            .extend_from_slice(data)
            .map_err(|_| BusError::BlockTooLong)?;

        self.i2c.write(address, &packet).map_err(BusError::Bus)
    }
}

/// Error from [`Preopened`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlreadyTaken;

/// Opener for a bus the board code has already set up
///
/// Hands out its bus on the first [`I2cOpen::open`] and fails afterwards.
/// The channel number is ignored.
#[derive(Debug)]
pub struct Preopened<B> {
    bus: Option<B>,
}

impl<B> Preopened<B> {
    pub fn new(bus: B) -> Self {
        Self { bus: Some(bus) }
    }
}

impl<B: I2cBus> I2cOpen for Preopened<B> {
    type Bus = B;
    type Error = AlreadyTaken;

    fn open(&mut self, _channel: u8) -> Result<B, AlreadyTaken> {
        self.bus.take().ok_or(AlreadyTaken)
    }
}
