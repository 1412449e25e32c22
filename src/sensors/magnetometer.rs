//! Magnetometer front-end settings and sensitivity tables
//!
//! Provides the gain levels of the MLX90393 analog front end and the
//! µT/LSB sensitivity tables indexed by resolution, hall configuration and
//! gain. The tables are plain data for whoever converts raw measurements;
//! the register layer never reads them.

/// Analog front-end gain
///
/// The discriminant is the raw 3-bit `GAIN_SEL` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Gain {
    /// 5× gain
    X5 = 0,
    /// 4× gain
    X4 = 1,
    /// 3× gain
    X3 = 2,
    /// 2.5× gain
    X2_5 = 3,
    /// 2× gain
    X2 = 4,
    /// 1.67× gain
    X1_67 = 5,
    /// 1.33× gain
    X1_33 = 6,
    /// 1× gain
    X1 = 7,
}

impl Gain {
    /// All gain levels, ordered by raw code
    pub const ALL: [Self; 8] = [
        Self::X5,
        Self::X4,
        Self::X3,
        Self::X2_5,
        Self::X2,
        Self::X1_67,
        Self::X1_33,
        Self::X1,
    ];

    /// Decode a raw `GAIN_SEL` field value
    ///
    /// Only the low three bits are considered.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self::ALL[(bits & 0b111) as usize]
    }

    /// Look up the gain for a raw code, if it is one
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        if code < 8 {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// Raw `GAIN_SEL` code
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Name of the gain level, e.g. `"GAIN_1_67X"`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::X5 => "GAIN_5X",
            Self::X4 => "GAIN_4X",
            Self::X3 => "GAIN_3X",
            Self::X2_5 => "GAIN_2_5X",
            Self::X2 => "GAIN_2X",
            Self::X1_67 => "GAIN_1_67X",
            Self::X1_33 => "GAIN_1_33X",
            Self::X1 => "GAIN_1X",
        }
    }

    /// Nominal amplification factor
    #[must_use]
    pub const fn multiplier(self) -> f32 {
        match self {
            Self::X5 => 5.0,
            Self::X4 => 4.0,
            Self::X3 => 3.0,
            Self::X2_5 => 2.5,
            Self::X2 => 2.0,
            Self::X1_67 => 1.67,
            Self::X1_33 => 1.33,
            Self::X1 => 1.0,
        }
    }
}

impl core::fmt::Display for Gain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Output resolution selector (`RES_X`, `RES_Y`, `RES_Z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// Finest resolution
    Res0 = 0,
    /// 2× coarser than `Res0`
    Res1 = 1,
    /// 4× coarser than `Res0`
    Res2 = 2,
    /// 8× coarser than `Res0`
    Res3 = 3,
}

/// Which sensitivity table applies for the current hall configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HallTable {
    /// `HALLCONF = 0xC` (power-on default)
    Conf0C = 0,
    /// `HALLCONF = 0x0`
    Conf00 = 1,
}

impl HallTable {
    /// Select the table for a raw hall configuration value
    ///
    /// Returns `None` for configurations without characterised sensitivity.
    #[must_use]
    pub const fn from_hall_conf(hall_conf: u8) -> Option<Self> {
        match hall_conf {
            0x0C => Some(Self::Conf0C),
            0x00 => Some(Self::Conf00),
            _ => None,
        }
    }
}

/// X/Y axis sensitivity in µT/LSB, indexed `[resolution][hall table][gain code]`
pub static SENSITIVITY_XY: [[[f32; 8]; 2]; 4] = [
    [
        [0.751, 0.601, 0.451, 0.376, 0.300, 0.250, 0.200, 0.150],
        [0.787, 0.629, 0.472, 0.393, 0.315, 0.262, 0.210, 0.157],
    ],
    [
        [1.502, 1.202, 0.901, 0.751, 0.601, 0.501, 0.401, 0.300],
        [1.573, 1.258, 0.944, 0.787, 0.629, 0.524, 0.419, 0.315],
    ],
    [
        [3.004, 2.403, 1.803, 1.502, 1.202, 1.001, 0.801, 0.601],
        [3.146, 2.517, 1.888, 1.573, 1.258, 1.049, 0.839, 0.629],
    ],
    [
        [6.009, 4.840, 3.605, 3.004, 2.403, 2.003, 1.602, 1.202],
        [6.292, 5.034, 3.775, 3.146, 2.517, 2.097, 1.678, 1.258],
    ],
];

/// Z axis sensitivity in µT/LSB, indexed `[resolution][hall table][gain code]`
pub static SENSITIVITY_Z: [[[f32; 8]; 2]; 4] = [
    [
        [1.210, 0.968, 0.726, 0.605, 0.484, 0.403, 0.323, 0.242],
        [1.267, 1.014, 0.760, 0.634, 0.507, 0.422, 0.338, 0.253],
    ],
    [
        [2.420, 1.936, 1.452, 1.210, 0.968, 0.807, 0.645, 0.484],
        [2.534, 2.027, 1.521, 1.267, 1.014, 0.845, 0.676, 0.507],
    ],
    [
        [4.840, 3.872, 2.904, 2.420, 1.936, 1.613, 1.291, 0.968],
        [5.068, 4.055, 3.041, 2.534, 2.027, 1.689, 1.352, 1.014],
    ],
    [
        [9.680, 7.744, 5.808, 4.840, 3.872, 3.227, 2.581, 1.936],
        [10.137, 8.109, 6.082, 5.068, 4.055, 3.379, 2.703, 2.027],
    ],
];

/// X/Y axis sensitivity in µT/LSB
#[must_use]
pub fn xy_sensitivity(resolution: Resolution, table: HallTable, gain: Gain) -> f32 {
    SENSITIVITY_XY[resolution as usize][table as usize][gain as usize]
}

/// Z axis sensitivity in µT/LSB
#[must_use]
pub fn z_sensitivity(resolution: Resolution, table: HallTable, gain: Gain) -> f32 {
    SENSITIVITY_Z[resolution as usize][table as usize][gain as usize]
}
