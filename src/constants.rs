// Physical constants in SI units (meters, kilograms, joules).

/// Speed of light in vacuum [m/s]
pub const C_LIGHT: f64 = 2.997_924_58e8;
/// Speed of light squared [m^2/s^2]
pub const C_SQUARED: f64 = C_LIGHT * C_LIGHT;
/// Atomic mass unit [kg]
pub const AMU: f64 = 1.660_538_921e-27;
/// Electron volt [J]
pub const EV: f64 = 1.602_176_57e-19;
/// Exa-electron volt [J]
pub const EEV: f64 = 1e18 * EV;
/// Megaparsec [m]
pub const MPC: f64 = 3.085_677_581e22;
