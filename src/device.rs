//! High-level driver API for the MLX90393
//!
//! This module provides the device object that owns the bus, performs the
//! command/response exchanges used by the register accessors, and exposes
//! the named configuration settings built on them.

use crate::access::{BitField, Register};
use crate::interface::I2cInterface;
use crate::registers;
use crate::sensors::Gain;
use crate::status::Status;
use crate::{Error, I2C_ADDRESS_DEFAULT};

/// Main driver for the MLX90393
pub struct Mlx90393<I2C> {
    interface: I2cInterface<I2C>,
    last_status: Option<u8>,
}

impl<I2C> Mlx90393<I2C> {
    /// Create a driver talking to the default address (0x0C)
    ///
    /// No bus traffic is generated until a setting is accessed.
    pub const fn new(i2c: I2C) -> Self {
        Self::new_with_address(i2c, I2C_ADDRESS_DEFAULT)
    }

    /// Create a driver talking to a custom 7-bit address
    pub const fn new_with_address(i2c: I2C, address: u8) -> Self {
        Self::from_interface(I2cInterface::new(i2c, address))
    }

    /// Create a driver from an existing interface
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut mlx = Mlx90393::from_interface(I2cInterface::default(i2c));
    /// ```
    pub const fn from_interface(interface: I2cInterface<I2C>) -> Self {
        Self {
            interface,
            last_status: None,
        }
    }

    /// The 7-bit device address
    pub const fn address(&self) -> u8 {
        self.interface.address()
    }

    /// Status byte of the most recent response
    ///
    /// `None` until the first transaction completes. The value is recorded
    /// as received and never checked by the driver.
    pub const fn last_status(&self) -> Option<u8> {
        self.last_status
    }

    /// Decoded status byte of the most recent response
    pub fn status(&self) -> Option<Status> {
        self.last_status.map(Status)
    }

    /// Consume the driver and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.interface.release()
    }
}

impl<I2C> Mlx90393<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Send a command and read its response, recording the status byte
    ///
    /// `response` must be sized for the status byte plus any payload.
    pub(crate) fn exchange(
        &mut self,
        command: &[u8],
        response: &mut [u8],
    ) -> Result<(), Error<I2C::Error>> {
        self.interface.write(command)?;
        self.interface.read(response)?;
        self.last_status = response.first().copied();
        Ok(())
    }

    /// Read an arbitrary bit field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_field(&mut self, field: &BitField) -> Result<u32, Error<I2C::Error>> {
        field.read(self)
    }

    /// Write an arbitrary bit field, preserving the rest of its register
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `value` does not fit in the
    /// field, or an error if communication with the device fails.
    pub fn write_field(&mut self, field: &BitField, value: u32) -> Result<(), Error<I2C::Error>> {
        field.write(self, value)
    }

    /// Read an arbitrary 16-bit register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register(&mut self, register: &Register) -> Result<u16, Error<I2C::Error>> {
        register.read(self)
    }

    /// Overwrite an arbitrary 16-bit register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_register(
        &mut self,
        register: &Register,
        value: u16,
    ) -> Result<(), Error<I2C::Error>> {
        register.write(self, value)
    }

    /// Read the analog gain setting
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gain(&mut self) -> Result<Gain, Error<I2C::Error>> {
        let code = registers::GAIN.read(self)?;
        Ok(Gain::from_bits(code))
    }

    /// Set the analog gain
    ///
    /// Gain codes are accepted in `1..8` only, so [`Gain::X5`] (code 0) is
    /// rejected like any other out-of-range value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for [`Gain::X5`], or an error if
    /// communication with the device fails.
    pub fn set_gain(&mut self, gain: Gain) -> Result<(), Error<I2C::Error>> {
        self.set_gain_code(i32::from(gain.code()))
    }

    /// Set the analog gain from a raw code
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `code` is outside `1..8`, or an
    /// error if communication with the device fails.
    pub fn set_gain_code(&mut self, code: i32) -> Result<(), Error<I2C::Error>> {
        let code = match u32::try_from(code) {
            Ok(code) if (1..8).contains(&code) => code,
            _ => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Rejected gain code {=i32}", code);
                return Err(Error::InvalidArgument);
            }
        };

        registers::GAIN.write(self, code)
    }

    /// Read the hall plate configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn hall_conf(&mut self) -> Result<u8, Error<I2C::Error>> {
        let value = registers::HALL_CONF.read(self)?;
        // 4-bit field
        Ok(value as u8)
    }

    /// Set the hall plate configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `value` does not fit in 4 bits,
    /// or an error if communication with the device fails.
    pub fn set_hall_conf(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        registers::HALL_CONF.write(self, u32::from(value))
    }

    /// Read register 0x00 as a whole
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn config0(&mut self) -> Result<u16, Error<I2C::Error>> {
        registers::CONFIG_0.read(self)
    }

    /// Overwrite register 0x00
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_config0(&mut self, value: u16) -> Result<(), Error<I2C::Error>> {
        registers::CONFIG_0.write(self, value)
    }

    /// Read register 0x02 as a whole
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn config2(&mut self) -> Result<u16, Error<I2C::Error>> {
        registers::CONFIG_2.read(self)
    }

    /// Overwrite register 0x02
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_config2(&mut self, value: u16) -> Result<(), Error<I2C::Error>> {
        registers::CONFIG_2.write(self, value)
    }

    /// Read the 3-bit field at register 0x02, bit 3
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn config2_bits(&mut self) -> Result<u8, Error<I2C::Error>> {
        let value = registers::CONFIG_2_BITS.read(self)?;
        Ok(value as u8)
    }

    /// Write the 3-bit field at register 0x02, bit 3
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `value` does not fit in 3 bits,
    /// or an error if communication with the device fails.
    pub fn set_config2_bits(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        registers::CONFIG_2_BITS.write(self, u32::from(value))
    }
}
