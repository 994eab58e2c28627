// Nucleus identity codec.
//
// Nuclei are identified by PDG-style integer codes 10LZZZAAAI with the
// isomer and excitation digits fixed at zero, i.e.
// id = 1_000_000_000 + Z * 10_000 + A * 10.

use crate::constants::{AMU, C_SQUARED};

/// Encode a nucleus with mass number `a` and charge number `z`.
pub fn nucleus_id(a: i32, z: i32) -> i64 {
    1_000_000_000 + z as i64 * 10_000 + a as i64 * 10
}

/// Mass number A from a nucleus id.
pub fn mass_number_from_id(id: i64) -> i32 {
    ((id / 10) % 1000) as i32
}

/// Charge number Z from a nucleus id.
pub fn charge_number_from_id(id: i64) -> i32 {
    ((id / 10_000) % 1000) as i32
}

/// Approximate nucleus rest mass [kg], A times the atomic mass unit.
/// Binding energy corrections are negligible at the precision needed for
/// Lorentz factor lookups.
pub fn nucleus_mass(id: i64) -> f64 {
    mass_number_from_id(id) as f64 * AMU
}

/// Rest mass energy of a nucleus [J].
pub fn nucleus_rest_energy(id: i64) -> f64 {
    nucleus_mass(id) * C_SQUARED
}
