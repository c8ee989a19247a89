//! Error types
//!
//! The simulation itself cannot fail; errors only describe input a caller
//! handed us that would corrupt the world, or configuration we refuse to run.

use thiserror::Error;

/// Errors reported to the collaborator driving the simulation
#[derive(Error, Debug)]
pub enum SimError {
    /// Direct paddle placement with a NaN or infinite coordinate
    #[error("non-finite coordinate rejected: {value}")]
    NonFiniteCoordinate { value: f32 },

    /// Settings that would break a world invariant
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
