use std::collections::HashMap;

use crate::nucleus::{charge_number_from_id, mass_number_from_id, nucleus_rest_energy};

/// Identity and energy of a single nucleus.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    id: i64,
    energy: f64,
}

impl ParticleState {
    pub fn new(id: i64, energy: f64) -> Self {
        Self { id, energy }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    /// Total energy [J].
    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn set_energy(&mut self, energy: f64) {
        self.energy = energy;
    }

    pub fn mass_number(&self) -> i32 {
        mass_number_from_id(self.id)
    }

    pub fn charge_number(&self) -> i32 {
        charge_number_from_id(self.id)
    }

    /// Lorentz factor, total energy over rest mass energy.
    pub fn lorentz_factor(&self) -> f64 {
        self.energy / nucleus_rest_energy(self.id)
    }
}

/// Interaction proposed for a candidate but not yet performed: the sampled
/// comoving distance to the interaction point and the channel that won the
/// competing-clock race.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    /// Comoving distance to the interaction [m].
    pub distance: f64,
    /// Six-digit disintegration channel code.
    pub channel: i32,
}

/// A nucleus being propagated, together with the per-step bookkeeping the
/// interaction modules need.
///
/// Pending interactions are stored in a slot keyed by the proposing module's
/// description string, so several interaction modules can operate on the
/// same candidate without clobbering each other's state. Secondaries created
/// by an interaction are appended to `secondaries` and drained by the outer
/// loop.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub current: ParticleState,
    redshift: f64,
    active: bool,
    secondaries: Vec<ParticleState>,
    interaction_states: HashMap<String, InteractionState>,
}

impl Candidate {
    pub fn new(id: i64, energy: f64, redshift: f64) -> Self {
        Candidate {
            current: ParticleState::new(id, energy),
            redshift,
            active: true,
            secondaries: Vec::new(),
            interaction_states: HashMap::new(),
        }
    }

    pub fn redshift(&self) -> f64 {
        self.redshift
    }

    pub fn set_redshift(&mut self, redshift: f64) {
        self.redshift = redshift;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remove the candidate from further propagation.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Append a secondary particle produced by an interaction.
    pub fn add_secondary(&mut self, id: i64, energy: f64) {
        self.secondaries.push(ParticleState::new(id, energy));
    }

    pub fn secondaries(&self) -> &[ParticleState] {
        &self.secondaries
    }

    /// Drain the accumulated secondaries for banking by the outer loop.
    pub fn take_secondaries(&mut self) -> Vec<ParticleState> {
        std::mem::take(&mut self.secondaries)
    }

    /// Record a pending interaction under the proposing module's key.
    /// A later call with the same key overwrites the previous proposal.
    pub fn set_interaction_state(&mut self, key: &str, state: InteractionState) {
        self.interaction_states.insert(key.to_string(), state);
    }

    pub fn interaction_state(&self, key: &str) -> Option<&InteractionState> {
        self.interaction_states.get(key)
    }

    /// Clear all pending interactions, typically after one has been performed.
    pub fn clear_interaction_states(&mut self) {
        self.interaction_states.clear();
    }
}
