use serde::{Deserialize, Serialize};

use crate::nucleus::nucleus_id;

/// (mass number, charge number) of each light product species, ordered to
/// match the digit positions of the channel code from most significant
/// (neutron) to least significant (He-4).
const SPECIES: [(i32, i32); 6] = [
    (1, 0), // neutron
    (1, 1), // proton
    (2, 1), // deuteron
    (3, 1), // triton
    (3, 2), // He-3
    (4, 2), // He-4
];

/// Per-species emission counts of one disintegration channel.
///
/// Rate table files identify a channel by a six-digit decimal code: ones
/// digit = He-4 count, tens = He-3, hundreds = H-3, thousands = H-2,
/// ten-thousands = proton, hundred-thousands = neutron. The code is decoded
/// once at table load so the hot path never repeats the digit arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelProducts {
    pub n: u32,
    pub p: u32,
    pub h2: u32,
    pub h3: u32,
    pub he3: u32,
    pub he4: u32,
}

impl ChannelProducts {
    /// Decode a six-digit channel code into per-species counts.
    pub fn decode(channel: i32) -> Self {
        let digit = |place: i32| ((channel / place) % 10) as u32;
        ChannelProducts {
            n: digit(100_000),
            p: digit(10_000),
            h2: digit(1_000),
            h3: digit(100),
            he3: digit(10),
            he4: digit(1),
        }
    }

    /// Total number of nucleons carried away by the emitted products.
    pub fn mass_loss(&self) -> i32 {
        (self.n + self.p + 2 * self.h2 + 3 * self.h3 + 3 * self.he3 + 4 * self.he4) as i32
    }

    /// Total charge carried away by the emitted products.
    pub fn charge_loss(&self) -> i32 {
        (self.p + self.h2 + self.h3 + 2 * self.he3 + 2 * self.he4) as i32
    }

    /// Iterate over `(count, mass number, nucleus id)` for each species.
    pub fn emitted(&self) -> impl Iterator<Item = (u32, i32, i64)> + '_ {
        let counts = [self.n, self.p, self.h2, self.h3, self.he3, self.he4];
        counts
            .into_iter()
            .zip(SPECIES)
            .map(|(count, (a, z))| (count, a, nucleus_id(a, z)))
    }
}
