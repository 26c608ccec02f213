use std::{io, path::PathBuf};

/// Errors surfaced by the report generator and the binary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },

    /// A codec option was rejected.
    #[error("invalid codec configuration: {0}")]
    Codec(#[from] basen::ConfigError),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
}

/// Result alias of this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
