//! IS31FL3730 matrix driver
//!
//! Drives an 11x5 LED matrix (the scrollphat board) through an IS31FL3730
//! on I2C. The driver owns a framebuffer that can be wider than the
//! panel; text and graphs are rendered into it and the visible window is
//! scrolled across it.
//!
//! # Pushes
//!
//! Every rendering operation ends in a push: the window at the current
//! offset is composed into a 12-byte draw frame and written to the draw
//! register. A failed push is counted, not returned. After
//! `io_error_threshold` failures (10 by default) a single warning is
//! logged telling the operator to check the wiring.
//!
//! # Concurrency
//!
//! All state is owned by the driver and mutated through `&mut self`.
//! Sharing one panel between tasks means wrapping the driver in a mutex.

use alloc::vec::Vec;
use core::mem;

use scrollphat_core::render;
use scrollphat_core::{ConfigError, DisplayConfig, DisplayState, Font, FrameBuffer};
use scrollphat_hal::{I2cBus, I2cOpen};
use scrollphat_protocol::{Command, DrawFrame};

#[cfg(feature = "defmt")]
use scrollphat_core::IO_ERROR_NOTICE;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<OpenErr, BusErr> {
    /// Opening the bus failed
    Open(OpenErr),
    /// A command write failed
    Bus(BusErr),
    /// Configuration rejected
    Config(ConfigError),
    /// No bus yet; call `initialize` first
    NotInitialized,
}

/// Result of driver commands for opener `O`
pub type DriverResult<O> =
    Result<(), Error<<O as I2cOpen>::Error, <<O as I2cOpen>::Bus as I2cBus>::Error>>;

/// IS31FL3730 driver
pub struct Is31fl3730<O: I2cOpen, F> {
    opener: O,
    bus: Option<O::Bus>,
    font: F,
    config: DisplayConfig,
    state: DisplayState,
    brightness: Option<u8>,
}

impl<O, F> Is31fl3730<O, F>
where
    O: I2cOpen,
    F: Font,
{
    /// Creates a new driver instance
    ///
    /// No bus traffic happens until [`Is31fl3730::initialize`].
    pub fn new(opener: O, font: F, config: DisplayConfig) -> Self {
        Self {
            opener,
            bus: None,
            font,
            state: DisplayState::new(config.rotate, config.io_error_threshold),
            config,
            brightness: None,
        }
    }

    /// Open the bus, reset all state and configure the matrix mode
    ///
    /// Resets the framebuffer, offset, error count and rotation (to the
    /// configured value). A bus opened by an earlier call is reused.
    /// Sends the configured brightness too, if one is set.
    pub fn initialize(&mut self) -> DriverResult<O> {
        self.config.validate().map_err(Error::Config)?;

        if self.bus.is_none() {
            let bus = self.opener.open(self.config.channel).map_err(Error::Open)?;
            self.bus = Some(bus);
        }

        self.state = DisplayState::new(self.config.rotate, self.config.io_error_threshold);
        self.brightness = None;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "IS31FL3730 at {=u8:#x} on channel {=u8}",
            self.config.address,
            self.config.channel
        );

        self.set_mode(self.config.mode)?;
        if let Some(level) = self.config.brightness {
            self.set_brightness(level)?;
        }

        Ok(())
    }

    /// Write the configuration (mode) register
    pub fn set_mode(&mut self, mode: u8) -> DriverResult<O> {
        self.send(Command::SetMode(mode))?;

        #[cfg(feature = "defmt")]
        defmt::debug!("mode set to {=u8:#b}", mode);

        Ok(())
    }

    /// Write the brightness register
    ///
    /// The level is sent as is; the device decides what it means.
    pub fn set_brightness(&mut self, level: u8) -> DriverResult<O> {
        self.send(Command::SetBrightness(level))?;
        self.brightness = Some(level);

        #[cfg(feature = "defmt")]
        defmt::debug!("brightness set to {=u8}", level);

        Ok(())
    }

    fn send(&mut self, command: Command) -> DriverResult<O> {
        let bus = self.bus.as_mut().ok_or(Error::NotInitialized)?;
        bus.write_register(self.config.address, command.register(), &command.payload())
            .map_err(Error::Bus)
    }

    /// Push the current window to the panel
    ///
    /// Returns `true` if the frame reached the bus. Failures, including
    /// pushing before `initialize`, are counted in [`Is31fl3730::io_errors`].
    pub fn update(&mut self) -> bool {
        let frame = self.state.frame();
        if self.send(Command::Draw(frame)).is_ok() {
            return true;
        }

        let notice = self.state.errors_mut().record_failure();

        #[cfg(feature = "defmt")]
        {
            defmt::trace!("push failed ({=u32} errors)", self.state.errors().count());
            if notice {
                defmt::warn!("{=str}", IO_ERROR_NOTICE);
            }
        }
        #[cfg(not(feature = "defmt"))]
        let _ = notice;

        false
    }

    /// Render `text` starting at column `x` and push once
    ///
    /// Returns the column after the rendered text.
    pub fn write_string(&mut self, text: &str, x: usize) -> usize {
        let end = render::write_string(self.state.buffer_mut(), &self.font, text, x);
        self.update();
        end
    }

    /// Render `values` as a bar graph from column 0 and push once
    ///
    /// `low` and `high` default to the minimum and maximum sample.
    pub fn graph(&mut self, values: &[f64], low: Option<f64>, high: Option<f64>) -> usize {
        let written = render::graph(self.state.buffer_mut(), values, low, high);
        self.update();
        written
    }

    /// Set column `x`, growing the framebuffer if needed
    ///
    /// Does not push.
    pub fn set_col(&mut self, x: usize, value: u8) {
        self.state.buffer_mut().set_col(x, value);
    }

    /// Set or clear one pixel, growing the framebuffer if needed
    ///
    /// Does not push. Returns `false` for rows off the panel.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        self.state.buffer_mut().set_pixel(x, y, on)
    }

    /// Replace the framebuffer
    ///
    /// Buffers narrower than the panel are zero-padded. Does not push.
    pub fn set_buffer(&mut self, columns: Vec<u8>) {
        self.state.replace_buffer(columns);
    }

    pub fn buffer_len(&self) -> usize {
        self.state.buffer().len()
    }

    pub fn buffer(&self) -> &FrameBuffer {
        self.state.buffer()
    }

    /// Move the window by `delta` columns and push
    pub fn scroll(&mut self, delta: isize) {
        self.state.scroll(delta);
        self.update();
    }

    /// Move the window to column `pos` and push
    ///
    /// `pos` wraps modulo the buffer length; negative positions count back
    /// from the end.
    pub fn scroll_to(&mut self, pos: isize) {
        self.state.scroll_to(pos);
        self.update();
    }

    /// Blank the framebuffer, rewind and push
    pub fn clear(&mut self) {
        self.state.clear();
        self.update();
    }

    /// Swap in a new font, returning the previous one
    pub fn load_font(&mut self, font: F) -> F {
        mem::replace(&mut self.font, font)
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    /// Failed pushes since the last `initialize`
    pub fn io_errors(&self) -> u32 {
        self.state.errors().count()
    }

    /// Whether the wiring warning has been raised
    pub fn io_warning_issued(&self) -> bool {
        self.state.errors().notice_issued()
    }

    pub fn offset(&self) -> usize {
        self.state.offset()
    }

    pub fn rotate(&self) -> bool {
        self.state.rotate()
    }

    /// Turn the 180° remap on or off; takes effect on the next push
    pub fn set_rotate(&mut self, rotate: bool) {
        self.state.set_rotate(rotate);
    }

    /// Last brightness written since `initialize`
    pub fn brightness(&self) -> Option<u8> {
        self.brightness
    }

    /// The frame the next push would send
    pub fn frame(&self) -> DrawFrame {
        self.state.frame()
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Releases the opener, the bus (if opened) and the font
    pub fn release(self) -> (O, Option<O::Bus>, F) {
        (self.opener, self.bus, self.font)
    }
}
