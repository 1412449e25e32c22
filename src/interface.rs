//! Bus interface for the MLX90393
//!
//! The chip is driven with plain I2C writes followed by plain I2C reads; it
//! never uses a repeated-start `write_read`, because every response is only
//! clocked out after the command has been fully latched.

use crate::I2C_ADDRESS_DEFAULT;

/// I2C interface for the MLX90393
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x0C)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut mlx = Mlx90393::from_interface(interface);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_DEFAULT,
        }
    }

    /// Create a new I2C interface with a custom device address
    ///
    /// The MLX90393 address depends on the A0/A1 strapping and on the
    /// factory variant, so any 7-bit address is accepted.
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - The 7-bit I2C device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit device address this interface talks to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    /// Write a command frame to the device
    ///
    /// # Errors
    ///
    /// Returns the bus error unchanged if the transfer fails.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), E> {
        #[cfg(feature = "defmt")]
        defmt::trace!("MLX90393 @ {=u8:#x} <- {=[u8]:#x}", self.address, bytes);

        self.i2c.write(self.address, bytes)
    }

    /// Read a response frame from the device into `buffer`
    ///
    /// # Errors
    ///
    /// Returns the bus error unchanged if the transfer fails.
    pub fn read(&mut self, buffer: &mut [u8]) -> Result<(), E> {
        self.i2c.read(self.address, buffer)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("MLX90393 @ {=u8:#x} -> {=[u8]:#x}", self.address, buffer);

        Ok(())
    }
}
