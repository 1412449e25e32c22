//! Register map for the MLX90393
//!
//! Registers are 16 bits wide and addressed with 6 bits. A register address
//! is never sent on its own: it is shifted left by two and appended to a
//! command opcode.
//!
//! ## Register 0x00
//! ```text
//!  15..8   |    7     |  6..4  |  3..0
//! ---------+----------+--------+----------
//!  (other) | Z_SERIES |  GAIN  | HALLCONF
//! ```
//!
//! Only the fields the driver names are listed; the remaining bits are kept
//! intact by the read-modify-write accessors.

use crate::access::{BitField, Register};

/// Read Register command opcode
pub const CMD_READ_REGISTER: u8 = 0b0101_0000;

/// Write Register command opcode
pub const CMD_WRITE_REGISTER: u8 = 0b0110_0000;

/// Highest register address reachable with the 6-bit address field
pub const MAX_REGISTER_ADDRESS: u8 = 0x3F;

/// Gain and hall configuration register
pub const REG_CONFIG_0: u8 = 0x00;

/// Secondary configuration register (resolution, filter, oversampling)
pub const REG_CONFIG_2: u8 = 0x02;

/// Whoami register, consumed by device identification
pub const REG_WHOAMI: u8 = 0x0C;

/// Whole-register accessor for register 0x00
pub const CONFIG_0: Register = Register::new(REG_CONFIG_0);

/// Whole-register accessor for register 0x02
pub const CONFIG_2: Register = Register::new(REG_CONFIG_2);

/// Analog gain code, 3 bits at register 0x00 bit 4
pub const GAIN: BitField = BitField::new(REG_CONFIG_0, 4, 3);

/// Hall plate spinning configuration, 4 bits at register 0x00 bit 0
pub const HALL_CONF: BitField = BitField::new(REG_CONFIG_0, 0, 4);

/// 3-bit field at register 0x02 bit 3
pub const CONFIG_2_BITS: BitField = BitField::new(REG_CONFIG_2, 3, 3);
