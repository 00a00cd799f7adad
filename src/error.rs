//! Error types for dictionary construction and configuration.
//!
//! Failing to find a correction is not an error: [`Corrector::find_correction`]
//! returns `None` in that case.
//!
//! [`Corrector::find_correction`]: crate::corrector::Corrector::find_correction

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The frequency table could not be built: the source is missing,
    /// unreadable, malformed or empty.
    #[error("frequency data unavailable: {0}")]
    DataUnavailable(String),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn data_unavailable<S: Into<String>>(msg: S) -> Self {
        Error::DataUnavailable(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
