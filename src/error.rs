//! Error types emitted by the sightseer CLI.

use thiserror::Error;

use crate::edsm::EdsmError;
use crate::mission::MissionError;

/// Errors emitted by the sightseer CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or parsing the mission sheet failed.
    #[error(transparent)]
    Mission(#[from] MissionError),
    /// Looking up system coordinates on EDSM failed.
    #[error(transparent)]
    Edsm(#[from] EdsmError),
    /// Serializing the JSON report failed.
    #[error("failed to serialize the report: {0}")]
    SerializeReport(#[source] serde_json::Error),
}
