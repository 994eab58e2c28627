// Ambient photon background selection and redshift evolution.

use serde::{Deserialize, Serialize};

use crate::utilities::interpolate_equidistant;

/// Ambient photon background a nucleus propagates through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhotonField {
    /// Cosmic microwave background
    Cmb,
    /// Infrared background
    Irb,
    /// Combined CMB and IRB
    CmbIrb,
}

impl PhotonField {
    /// Filename of the rate table tabulated for this background.
    pub fn table_filename(&self) -> &'static str {
        match self {
            PhotonField::Cmb => "photodis_CMB.txt",
            PhotonField::Irb => "photodis_IRB.txt",
            PhotonField::CmbIrb => "photodis_CMB_IRB.txt",
        }
    }

    /// Human readable label used in module descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            PhotonField::Cmb => "CMB",
            PhotonField::Irb => "IRB",
            PhotonField::CmbIrb => "CMB and IRB",
        }
    }
}

/// Comoving IRB photon density relative to z = 0, tabulated at equidistant
/// redshifts over [0, 4]. Follows the star formation history: rising to a
/// peak near z ~ 1.3, then falling off. The IRB has no support beyond z = 4.
const IRB_SCALING_Z_MAX: f64 = 4.0;
const IRB_SCALING: [f64; 17] = [
    1.00, 1.96, 2.93, 3.83, 4.43, 4.72, 4.70, 4.43, 3.99, 3.45, 2.89, 2.35, 1.85, 1.41, 1.04,
    0.73, 0.50,
];

/// Photon number density of `field` at redshift `z` relative to z = 0.
///
/// The CMB density scales exactly as (1+z)^3. The IRB factor is interpolated
/// from the tabulated evolution and drops to zero beyond its z = 4 support,
/// which propagates an infinite interaction distance to the caller. The
/// combined background uses the CMB scaling, which dominates the
/// disintegration rate at the tabulated energies.
pub fn photon_field_scaling(field: PhotonField, z: f64) -> f64 {
    match field {
        PhotonField::Cmb | PhotonField::CmbIrb => (1.0 + z).powi(3),
        PhotonField::Irb => {
            if z > IRB_SCALING_Z_MAX {
                0.0
            } else {
                interpolate_equidistant(z, 0.0, IRB_SCALING_Z_MAX, &IRB_SCALING)
            }
        }
    }
}
