//! Transport error accounting
//!
//! Failed pushes are not fatal: the render loop keeps going and the
//! failure is counted. Once the count reaches a threshold the operator
//! gets a single notice that the wiring is probably at fault.

/// Failures before the operator notice is raised
pub const IO_ERROR_THRESHOLD: u32 = 10;

/// Operator notice text
pub const IO_ERROR_NOTICE: &str =
    "A high number of IO errors have occurred, please check your soldering/connections";

/// Monotonic transport failure counter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ErrorCounter {
    count: u32,
    threshold: u32,
    notice_issued: bool,
}

impl Default for ErrorCounter {
    fn default() -> Self {
        Self::new(IO_ERROR_THRESHOLD)
    }
}

impl ErrorCounter {
    /// Create a counter that raises its notice at `threshold` failures
    pub const fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold,
            notice_issued: false,
        }
    }

    /// Record one failure
    ///
    /// Returns `true` exactly once: on the failure that brings the count
    /// to the threshold.
    pub fn record_failure(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        if !self.notice_issued && self.count == self.threshold {
            self.notice_issued = true;
            return true;
        }
        false
    }

    /// Failures recorded so far
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether the operator notice has been raised
    pub fn notice_issued(&self) -> bool {
        self.notice_issued
    }

    /// Threshold this counter raises its notice at
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}
