//! Record error types.

use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur while encoding or decoding a machine record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The input was not a well-formed record
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The record decoded but does not describe a valid machine
    #[error("Record validation failed: {0}")]
    Invalid(#[from] MachineError),
}
