use thiserror::Error;

use crate::parse::ParseError;

/// Unified error type covering directive parsing and I/O.
///
/// Returned by file-based entry points like
/// [`Charge::from_file()`](crate::Charge::from_file).
#[derive(Debug, Error)]
pub enum RadarError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
