//! Fee suggestion error types.

use alloy::transports::{RpcError, TransportErrorKind};

/// Errors that can occur during fee suggestion and inclusion estimation.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// The fee history snapshot has an empty base fee or gas used ratio
    /// sequence.
    #[error("empty fee history")]
    EmptyFeeHistory,

    /// No usable reward values were found for a requested percentile column.
    #[error("insufficient reward data for percentile column {column}")]
    InsufficientData {
        /// Index of the reward column that had no usable values.
        column: usize,
    },

    /// The underlying RPC or oracle call failed.
    ///
    /// Transport failures are surfaced with the cause attached and are never
    /// retried internally.
    #[error(transparent)]
    Transport(#[from] RpcError<TransportErrorKind>),
}
