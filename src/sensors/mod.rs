//! Sensor settings for the MLX90393
//!
//! Types describing the magnetometer front end (gain, resolution) and the
//! sensitivity tables that go with them. Register access for these settings
//! is performed through methods on `Mlx90393`.

pub mod magnetometer;

// Re-export main types
pub use magnetometer::{
    Gain, HallTable, Resolution, SENSITIVITY_XY, SENSITIVITY_Z, xy_sensitivity, z_sensitivity,
};
