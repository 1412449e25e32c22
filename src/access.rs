//! Register and bit-field accessors
//!
//! Every MLX90393 register transaction has the same shape: a command frame
//! made of an opcode, optional payload, and the register address shifted
//! left by two, followed by a response whose first byte is always the chip
//! status. The accessors in this module wrap that framing:
//!
//! - [`BitField`] reads and writes a sub-range of bits inside a register,
//!   using read-modify-write so neighbouring bits are preserved.
//! - [`Register`] reads and writes a whole 16-bit register.
//!
//! Accessors are immutable descriptors. They hold no bus handle; each call
//! borrows the [`Mlx90393`] it operates on, and each call records the status
//! byte of every response on that device.
//!
//! # Read-modify-write and shared buses
//!
//! [`BitField::write`] is two separate bus exchanges: a register read
//! followed by a register write. Nothing locks the register between them, so
//! another bus master changing the same register in that window will have its
//! change overwritten.
//!
//! # Example
//!
//! ```ignore
//! # use mlx90393::{BitField, Mlx90393};
//! # let mut mlx: Mlx90393<_> = todo!();
//! // Z-series bit of register 0x00
//! const Z_SERIES: BitField = BitField::new(0x00, 7, 1);
//!
//! Z_SERIES.write(&mut mlx, 1)?;
//! assert_eq!(Z_SERIES.read(&mut mlx)?, 1);
//! # Ok::<(), mlx90393::Error<()>>(())
//! ```

use crate::Error;
use crate::device::Mlx90393;
use crate::registers::{CMD_READ_REGISTER, CMD_WRITE_REGISTER, MAX_REGISTER_ADDRESS};

/// Widest register payload a [`BitField`] can address, in bytes
pub const MAX_BYTE_WIDTH: usize = 4;

/// Size of an MLX90393 register in bytes
const REGISTER_WIDTH: usize = 2;

/// Status byte prefixed to every response
const STATUS_LEN: usize = 1;

/// Build the command frame that requests the contents of `register`
#[must_use]
pub const fn read_command(register: u8) -> [u8; 2] {
    [CMD_READ_REGISTER, register << 2]
}

/// Order in which register payload bytes are assembled into an integer
///
/// The same order is used to decode a register read and to encode the
/// value written back, so a read-modify-write never reshuffles bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteOrder {
    /// First payload byte is the most significant (the MLX90393 wire format)
    #[default]
    BigEndian,
    /// First payload byte is the least significant
    LittleEndian,
}

impl ByteOrder {
    /// Assemble up to four payload bytes into an unsigned integer
    #[must_use]
    pub fn assemble(self, bytes: &[u8]) -> u32 {
        let fold = |acc: u32, &byte: &u8| (acc << 8) | u32::from(byte);
        match self {
            Self::BigEndian => bytes.iter().fold(0, fold),
            Self::LittleEndian => bytes.iter().rev().fold(0, fold),
        }
    }

    /// Encode the low `out.len()` bytes of `value` into `out`
    pub fn encode(self, value: u32, out: &mut [u8]) {
        let len = out.len();
        match self {
            Self::BigEndian => out.copy_from_slice(&value.to_be_bytes()[MAX_BYTE_WIDTH - len..]),
            Self::LittleEndian => out.copy_from_slice(&value.to_le_bytes()[..len]),
        }
    }
}

/// A named sub-range of bits inside a device register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    register: u8,
    start_bit: u8,
    num_bits: u8,
    byte_width: u8,
    byte_order: ByteOrder,
}

impl BitField {
    /// Describe a field inside a 16-bit big-endian register
    ///
    /// # Panics
    ///
    /// Panics if the field does not fit in the register. Descriptors are
    /// normally `const` items, so this surfaces at compile time.
    #[must_use]
    pub const fn new(register: u8, start_bit: u8, num_bits: u8) -> Self {
        Self::with_layout(
            register,
            start_bit,
            num_bits,
            REGISTER_WIDTH as u8,
            ByteOrder::BigEndian,
        )
    }

    /// Describe a field inside a register of arbitrary width and byte order
    ///
    /// # Panics
    ///
    /// Panics if `register` is outside `0x00..=0x3F`, `byte_width` is not in
    /// `1..=4`, `num_bits` is zero, or `start_bit + num_bits` exceeds the
    /// register width.
    #[must_use]
    pub const fn with_layout(
        register: u8,
        start_bit: u8,
        num_bits: u8,
        byte_width: u8,
        byte_order: ByteOrder,
    ) -> Self {
        assert!(register <= MAX_REGISTER_ADDRESS, "register address out of range");
        assert!(
            byte_width >= 1 && byte_width as usize <= MAX_BYTE_WIDTH,
            "unsupported register width"
        );
        assert!(num_bits >= 1, "bit field must be at least one bit wide");
        assert!(
            start_bit as u32 + num_bits as u32 <= byte_width as u32 * 8,
            "bit field does not fit in register"
        );

        Self {
            register,
            start_bit,
            num_bits,
            byte_width,
            byte_order,
        }
    }

    /// Register address the field lives in
    #[must_use]
    pub const fn register(&self) -> u8 {
        self.register
    }

    /// Position of the field's least significant bit
    #[must_use]
    pub const fn start_bit(&self) -> u8 {
        self.start_bit
    }

    /// Width of the field in bits
    #[must_use]
    pub const fn num_bits(&self) -> u8 {
        self.num_bits
    }

    /// Width of the containing register in bytes
    #[must_use]
    pub const fn byte_width(&self) -> u8 {
        self.byte_width
    }

    /// Byte order of the containing register
    #[must_use]
    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Largest value the field can hold
    #[must_use]
    pub const fn max_value(&self) -> u32 {
        u32::MAX >> (32 - self.num_bits as u32)
    }

    /// Mask selecting the field's bits within the register
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.max_value() << self.start_bit
    }

    /// Read the field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read<I2C>(&self, device: &mut Mlx90393<I2C>) -> Result<u32, Error<I2C::Error>>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        let register = self.read_register_value(device)?;
        Ok((register & self.mask()) >> self.start_bit)
    }

    /// Write the field, preserving every other bit of the register
    ///
    /// The current register contents are read first, the field's bits are
    /// replaced, and the whole register is written back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without touching the bus if `value`
    /// does not fit in the field, or a bus error if communication fails.
    pub fn write<I2C>(
        &self,
        device: &mut Mlx90393<I2C>,
        value: u32,
    ) -> Result<(), Error<I2C::Error>>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        if value > self.max_value() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Value {=u32} does not fit in {=u8}-bit field of register {=u8:#x}",
                value,
                self.num_bits,
                self.register
            );
            return Err(Error::InvalidArgument);
        }

        let mut register = self.read_register_value(device)?;
        register &= !self.mask();
        register |= value << self.start_bit;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Writing register {=u8:#x} = {=u32:#x} (field bits {=u8}..{=u8})",
            self.register,
            register,
            self.start_bit,
            self.start_bit + self.num_bits
        );

        let width = usize::from(self.byte_width);
        let mut command = [0u8; MAX_BYTE_WIDTH + 2];
        command[0] = CMD_WRITE_REGISTER;
        self.byte_order.encode(register, &mut command[1..=width]);
        command[width + 1] = self.register << 2;

        let mut response = [0u8; MAX_BYTE_WIDTH + STATUS_LEN];
        device.exchange(&command[..width + 2], &mut response[..width + STATUS_LEN])
    }

    /// Read the complete register holding this field
    fn read_register_value<I2C>(
        &self,
        device: &mut Mlx90393<I2C>,
    ) -> Result<u32, Error<I2C::Error>>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        let width = usize::from(self.byte_width);
        let mut response = [0u8; MAX_BYTE_WIDTH + STATUS_LEN];
        device.exchange(
            &read_command(self.register),
            &mut response[..width + STATUS_LEN],
        )?;

        Ok(self
            .byte_order
            .assemble(&response[STATUS_LEN..width + STATUS_LEN]))
    }
}

/// A complete 16-bit device register
///
/// Writes always overwrite the whole register; there is no merging with the
/// previous contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Register {
    address: u8,
}

impl Register {
    /// Describe the register at `address`
    ///
    /// # Panics
    ///
    /// Panics if `address` is outside `0x00..=0x3F`.
    #[must_use]
    pub const fn new(address: u8) -> Self {
        assert!(address <= MAX_REGISTER_ADDRESS, "register address out of range");
        Self { address }
    }

    /// Register address
    #[must_use]
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Read the register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read<I2C>(&self, device: &mut Mlx90393<I2C>) -> Result<u16, Error<I2C::Error>>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        let mut response = [0u8; REGISTER_WIDTH + STATUS_LEN];
        device.exchange(&read_command(self.address), &mut response)?;

        Ok(u16::from_be_bytes([response[1], response[2]]))
    }

    /// Overwrite the register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write<I2C>(
        &self,
        device: &mut Mlx90393<I2C>,
        value: u16,
    ) -> Result<(), Error<I2C::Error>>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("Writing register {=u8:#x} = {=u16:#x}", self.address, value);

        let [msb, lsb] = value.to_be_bytes();
        let mut response = [0u8; REGISTER_WIDTH + STATUS_LEN];
        device.exchange(
            &[CMD_WRITE_REGISTER, msb, lsb, self.address << 2],
            &mut response,
        )
    }
}
