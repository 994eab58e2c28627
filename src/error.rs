use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring the module or loading rate tables.
///
/// Domain misses (unknown isotope, Lorentz factor outside the tabulated
/// range) are not errors; they are reported through ordinary return values.
#[derive(Error, Debug)]
pub enum PhotoDisError {
    #[error("could not open rate table {path:?}: {source}")]
    TableOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rate table {path:?}, line {line}: {message}")]
    TableParse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

pub type PhotoDisResult<T> = Result<T, PhotoDisError>;
