pub mod cli;
pub mod config;
pub mod corrector;
pub mod dict;
pub mod error;

pub use config::Config;
pub use corrector::edits::generate_edits;
pub use corrector::frequency::FrequencyTable;
pub use corrector::{Correction, Corrector};
pub use error::{Error, Result};
