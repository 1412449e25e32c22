#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod access;
pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;
pub mod status;

// Re-export main types
pub use access::{BitField, ByteOrder, Register};
pub use device::Mlx90393;
pub use interface::I2cInterface;
pub use sensors::{Gain, HallTable, Resolution};
pub use status::Status;

/// Default MLX90393 I2C address (A0 and A1 pins low)
pub const I2C_ADDRESS_DEFAULT: u8 = 0x0C;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// A setting was given a value outside its legal range
    InvalidArgument,
    /// No MLX90393 answered at the configured address (contains the whoami value read)
    DeviceNotFound(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
