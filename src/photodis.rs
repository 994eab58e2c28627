// Photo-disintegration of nuclei on ambient photon backgrounds.
//
// A nucleus above ~10^18 eV sees background photons blueshifted past the
// giant dipole resonance and can eject nucleons or light fragments. The
// interaction is handled in three steps matching the outer propagation
// loop's protocol: propose a stochastic interaction distance
// (set_next_interaction), carry out the winning channel once the step has
// consumed that distance (perform_interaction), and provide a deterministic
// loss length for adaptive step sizing (energy_loss_length).

use std::path::Path;

use rand::Rng;

use crate::candidate::{Candidate, InteractionState};
use crate::channel::ChannelProducts;
use crate::config::Config;
use crate::error::PhotoDisResult;
use crate::nucleus::{
    charge_number_from_id, mass_number_from_id, nucleus_id, nucleus_rest_energy,
};
use crate::photon_field::{photon_field_scaling, PhotonField};
use crate::table::{PdTable, LG_MAX, LG_MIN};
use crate::utilities::interpolate_equidistant;

/// Photo-disintegration interaction module.
///
/// Holds the rate table for one photon background. The table is immutable
/// after construction, so one instance can be shared by reference across
/// propagation threads; only the random number generator passed into
/// [`set_next_interaction`](Self::set_next_interaction) carries mutable
/// state.
#[derive(Debug, Clone)]
pub struct PhotoDisintegration {
    table: PdTable,
    photon_field: PhotonField,
    description: String,
}

impl PhotoDisintegration {
    /// Build the module for `photon_field`, loading its rate table from the
    /// configured data directory. A missing or malformed table file is a
    /// fatal configuration error.
    pub fn new(photon_field: PhotonField) -> PhotoDisResult<Self> {
        let path = Config::global().data_path(photon_field.table_filename());
        Self::from_file(photon_field, path)
    }

    /// Build the module from an explicit table file path.
    pub fn from_file<P: AsRef<Path>>(
        photon_field: PhotonField,
        path: P,
    ) -> PhotoDisResult<Self> {
        Ok(PhotoDisintegration {
            table: PdTable::from_file(path)?,
            photon_field,
            description: format!("PhotoDisintegration: {}", photon_field.label()),
        })
    }

    /// Key under which this module records interaction state on candidates.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn photon_field(&self) -> PhotonField {
        self.photon_field
    }

    /// Sample the distance to the candidate's next disintegration.
    ///
    /// Each channel of the isotope runs an independent exponential clock at
    /// its interpolated rate; the channel with the shortest distance wins.
    /// The winning distance is scaled by the photon density at the
    /// candidate's redshift and converted to the comoving frame, then
    /// recorded on the candidate under this module's description.
    ///
    /// Returns `false`, recording nothing, when the isotope has no channels,
    /// the blueshifted Lorentz factor falls outside the tabulated domain, or
    /// every channel's rate vanishes at the lookup point.
    /// Calling again before `perform_interaction` simply overwrites the
    /// previous proposal.
    pub fn set_next_interaction(&self, candidate: &mut Candidate, rng: &mut impl Rng) -> bool {
        let a = candidate.current.mass_number();
        let z = candidate.current.charge_number();

        let modes = self.table.modes(z, a - z);
        if modes.is_empty() {
            return false;
        }

        // Background photons are hotter at redshift z; shift the nucleus
        // energy by (1+z) before the table lookup.
        let zs = candidate.redshift();
        let lg = (candidate.current.lorentz_factor() * (1.0 + zs)).log10();

        // The tables have no support outside (6, 14); never extrapolate.
        if lg <= LG_MIN || lg >= LG_MAX {
            return false;
        }

        let mut interaction = InteractionState {
            distance: f64::MAX,
            channel: 0,
        };
        for mode in modes {
            let rate = interpolate_equidistant(lg, LG_MIN, LG_MAX, &mode.rate);
            let d = -rng.gen::<f64>().ln() / rate;
            if d < interaction.distance {
                interaction.distance = d;
                interaction.channel = mode.channel;
            }
        }

        // All rates can be zero at lg; no clock fired, nothing to record.
        if interaction.distance == f64::MAX {
            return false;
        }

        // Interaction length scales with 1 / photon density
        interaction.distance /= photon_field_scaling(self.photon_field, zs);
        // Convert to a comoving distance
        interaction.distance *= 1.0 + zs;

        candidate.set_interaction_state(&self.description, interaction);
        true
    }

    /// Carry out the previously proposed disintegration on `candidate`.
    ///
    /// Energy per nucleon is held fixed: the remaining nucleus keeps
    /// `EpA * A_new` and every emitted fragment carries `EpA` times its mass
    /// number, so total energy and baryon number are conserved. A parent
    /// losing all of its nucleons is deactivated. The candidate's pending
    /// interaction states are cleared on consumption.
    ///
    /// # Panics
    ///
    /// Panics if no interaction was recorded for this module on the
    /// candidate; that indicates a protocol bug in the outer loop, not a
    /// recoverable condition.
    pub fn perform_interaction(&self, candidate: &mut Candidate) {
        let interaction = *candidate
            .interaction_state(&self.description)
            .unwrap_or_else(|| {
                panic!(
                    "perform_interaction called without a pending interaction for '{}'",
                    self.description
                )
            });
        candidate.clear_interaction_states();

        let mode = ChannelProducts::decode(interaction.channel);
        let da = mode.mass_loss();
        let dz = mode.charge_loss();

        let a = candidate.current.mass_number();
        let z = candidate.current.charge_number();
        let energy_per_nucleon = candidate.current.energy() / a as f64;

        let new_a = a - da;
        if new_a > 0 {
            candidate.current.set_id(nucleus_id(new_a, z - dz));
            candidate.current.set_energy(energy_per_nucleon * new_a as f64);
        } else {
            // Fully disintegrated: all energy leaves with the secondaries.
            candidate.current.set_energy(0.0);
            candidate.deactivate();
        }

        for (count, product_a, product_id) in mode.emitted() {
            for _ in 0..count {
                candidate.add_secondary(product_id, energy_per_nucleon * product_a as f64);
            }
        }
    }

    /// Mean energy loss length of the nucleus `id` at total energy `energy`
    /// [J], for adaptive step sizing.
    ///
    /// Aggregates every channel's rate weighted by its fractional nucleon
    /// loss and returns the reciprocal. Deterministic; independent of the
    /// stochastic sampling path. Isotopes without channels and Lorentz
    /// factors outside the tabulated domain return `f64::MAX`.
    pub fn energy_loss_length(&self, id: i64, energy: f64) -> f64 {
        let a = mass_number_from_id(id);
        let z = charge_number_from_id(id);

        let modes = self.table.modes(z, a - z);
        if modes.is_empty() {
            return f64::MAX;
        }

        let lg = (energy / nucleus_rest_energy(id)).log10();
        if lg <= LG_MIN || lg >= LG_MAX {
            return f64::MAX;
        }

        let mut loss_rate = 0.0;
        for mode in modes {
            let rate = interpolate_equidistant(lg, LG_MIN, LG_MAX, &mode.rate);
            loss_rate += rate * mode.products.mass_loss() as f64 / a as f64;
        }

        1.0 / loss_rate
    }
}
