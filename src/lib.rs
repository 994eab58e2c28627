mod candidate;
mod channel;
mod config;
mod constants;
mod error;
mod nucleus;
mod photodis;
mod photon_field;
mod rng;
mod table;
mod utilities;

pub use candidate::{Candidate, InteractionState, ParticleState};
pub use channel::ChannelProducts;
pub use config::Config;
pub use constants::{AMU, C_LIGHT, C_SQUARED, EEV, EV, MPC};
pub use error::{PhotoDisError, PhotoDisResult};
pub use nucleus::{
    charge_number_from_id, mass_number_from_id, nucleus_id, nucleus_mass, nucleus_rest_energy,
};
pub use photodis::PhotoDisintegration;
pub use photon_field::{photon_field_scaling, PhotonField};
pub use rng::{history_rng, PropagationRng};
pub use table::{PdMode, PdTable, LG_MAX, LG_MIN, RATE_SAMPLES};
pub use utilities::interpolate_equidistant;
