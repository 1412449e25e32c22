//! Status byte decoding
//!
//! Every MLX90393 response starts with a status byte. The driver records the
//! most recent one on the device without acting on it; [`Status`] is a
//! convenience for callers that want to inspect it.
//!
//! ```text
//!    7    |   6      |    5    |   4   |  3  |  2 |  1 |  0
//! --------+----------+---------+-------+-----+----+----+----
//!  BURST  | WOC      | SM      | ERROR | SED | RS | D1 | D0
//! ```

/// Decoded MLX90393 status byte
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(pub u8);

impl Status {
    const BURST_MODE: u8 = 1 << 7;
    const WOC_MODE: u8 = 1 << 6;
    const SM_MODE: u8 = 1 << 5;
    const ERROR: u8 = 1 << 4;
    const SINGLE_ERROR_DETECTION: u8 = 1 << 3;
    const RESET: u8 = 1 << 2;
    const RESPONSE_LENGTH: u8 = 0b11;

    /// Raw status byte
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Burst mode is active
    #[must_use]
    pub const fn burst_mode(self) -> bool {
        self.0 & Self::BURST_MODE != 0
    }

    /// Wake-up-on-change mode is active
    #[must_use]
    pub const fn wake_on_change_mode(self) -> bool {
        self.0 & Self::WOC_MODE != 0
    }

    /// Single measurement mode is active
    #[must_use]
    pub const fn single_measurement_mode(self) -> bool {
        self.0 & Self::SM_MODE != 0
    }

    /// The previous command was rejected or memory recall failed
    #[must_use]
    pub const fn error(self) -> bool {
        self.0 & Self::ERROR != 0
    }

    /// A single-bit memory error was detected and corrected
    #[must_use]
    pub const fn single_error_detected(self) -> bool {
        self.0 & Self::SINGLE_ERROR_DETECTION != 0
    }

    /// The device was reset since the last command
    #[must_use]
    pub const fn reset(self) -> bool {
        self.0 & Self::RESET != 0
    }

    /// `D1:D0`, the number of 16-bit words following the status byte minus one
    ///
    /// Only meaningful for measurement responses.
    #[must_use]
    pub const fn response_length_code(self) -> u8 {
        self.0 & Self::RESPONSE_LENGTH
    }
}

impl From<u8> for Status {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}
