use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::channel::ChannelProducts;
use crate::constants::MPC;
use crate::error::{PhotoDisError, PhotoDisResult};

/// Number of rate samples per channel.
pub const RATE_SAMPLES: usize = 200;
/// Lower edge of the tabulated log10(Lorentz factor) domain.
pub const LG_MIN: f64 = 6.0;
/// Upper edge of the tabulated log10(Lorentz factor) domain.
pub const LG_MAX: f64 = 14.0;

// Z and N each span 0..=30
const GRID: usize = 31;

/// One disintegration channel of an isotope: the decoded product counts and
/// the interaction rate curve over the tabulated Lorentz factor domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdMode {
    /// Six-digit channel code as it appears in the table file.
    pub channel: i32,
    /// Product counts decoded from `channel`.
    pub products: ChannelProducts,
    /// Interaction rate [1/m] at `RATE_SAMPLES` equidistant points in
    /// log10(Lorentz factor) over [`LG_MIN`, `LG_MAX`].
    pub rate: Vec<f64>,
}

/// Disintegration channels for every isotope of one photon background,
/// indexed by (charge number Z, neutron number N).
///
/// Built once at module construction and immutable afterwards, so worker
/// threads can share a reference without locking.
#[derive(Debug, Clone)]
pub struct PdTable {
    modes: Vec<Vec<PdMode>>,
}

impl PdTable {
    fn empty() -> Self {
        PdTable {
            modes: vec![Vec::new(); GRID * GRID],
        }
    }

    /// Load a rate table from a text file.
    ///
    /// Lines starting with `#` and blank lines are skipped. Every other line
    /// must hold `Z N channel` followed by exactly [`RATE_SAMPLES`] rate
    /// values in 1/Mpc; rates are converted to 1/m on load. Malformed lines
    /// are rejected with the offending line number rather than silently
    /// truncated.
    pub fn from_file<P: AsRef<Path>>(path: P) -> PhotoDisResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PhotoDisError::TableOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    fn from_reader<R: BufRead>(reader: R, path: &Path) -> PhotoDisResult<Self> {
        let parse_err = |line: usize, message: String| PhotoDisError::TableParse {
            path: path.to_path_buf(),
            line,
            message,
        };

        let mut table = Self::empty();
        for (idx, line) in reader.lines().enumerate() {
            let lineno = idx + 1;
            let line = line.map_err(|source| PhotoDisError::TableOpen {
                path: path.to_path_buf(),
                source,
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let mut next_int = |name: &str| -> PhotoDisResult<i32> {
                let field = fields
                    .next()
                    .ok_or_else(|| parse_err(lineno, format!("missing {} field", name)))?;
                field
                    .parse()
                    .map_err(|_| parse_err(lineno, format!("invalid {} field '{}'", name, field)))
            };

            let z = next_int("Z")?;
            let n = next_int("N")?;
            let channel = next_int("channel")?;

            if !(0..GRID as i32).contains(&z) || !(0..GRID as i32).contains(&n) {
                return Err(parse_err(
                    lineno,
                    format!("isotope key Z={} N={} outside table grid 0..=30", z, n),
                ));
            }
            // Six decimal digits, one per product species
            if !(0..=999_999).contains(&channel) {
                return Err(parse_err(
                    lineno,
                    format!("channel code {} outside 0..=999999", channel),
                ));
            }

            let mut rate = Vec::with_capacity(RATE_SAMPLES);
            for field in fields.by_ref() {
                let r: f64 = field.parse().map_err(|_| {
                    parse_err(lineno, format!("invalid rate sample '{}'", field))
                })?;
                if r < 0.0 {
                    return Err(parse_err(lineno, format!("negative rate sample {}", r)));
                }
                rate.push(r / MPC);
            }
            if rate.len() != RATE_SAMPLES {
                return Err(parse_err(
                    lineno,
                    format!("expected {} rate samples, found {}", RATE_SAMPLES, rate.len()),
                ));
            }

            table.modes[z as usize * GRID + n as usize].push(PdMode {
                channel,
                products: ChannelProducts::decode(channel),
                rate,
            });
        }
        Ok(table)
    }

    /// Disintegration channels of the isotope (Z, N). Out-of-range keys and
    /// isotopes absent from the file yield an empty slice, meaning the
    /// isotope does not interact.
    pub fn modes(&self, z: i32, n: i32) -> &[PdMode] {
        if !(0..GRID as i32).contains(&z) || !(0..GRID as i32).contains(&n) {
            return &[];
        }
        &self.modes[z as usize * GRID + n as usize]
    }
}
