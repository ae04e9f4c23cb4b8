//! Physical constants in SI units.

/// Speed of light in vacuum (m/s).
pub const C0: f64 = 299_792_458.0;

/// Permittivity of free space (F/m).
pub const EPS0: f64 = 8.854_187_817e-12;

/// Permeability of free space (H/m).
pub const MU0: f64 = 1.256_637_061_435_917_3e-6;
