//! I2C bus abstractions
//!
//! The IS31FL3730 is write-only from the host's point of view: every
//! transaction is a register address followed by a block of data bytes
//! (SMBus "write block data" without the count byte).

/// I2C bus master
///
/// Provides the register write used to talk to the display controller.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write a block of data to a register of the device at `address`
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `register` - Register (command) byte sent first
    /// * `data` - Bytes written after the register
    fn write_register(&mut self, address: u8, register: u8, data: &[u8])
        -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        (**self).write_register(address, register, data)
    }
}

/// Source of I2C buses
///
/// Opening is separate from writing so a driver can be constructed before
/// the bus exists and acquire it during initialization.
pub trait I2cOpen {
    /// Bus handed out by [`I2cOpen::open`]
    type Bus: I2cBus;
    /// Error type for opening a bus
    type Error;

    /// Open the bus on the given channel (e.g. `/dev/i2c-1` is channel 1)
    fn open(&mut self, channel: u8) -> Result<Self::Bus, Self::Error>;
}
