//! Engine error types.

use thiserror::Error;

/// Errors surfaced by the allocation engine.
///
/// All variants are recoverable at the call site: the engine rejects
/// the operation and leaves its state unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Counter index outside `[1, size]` for the category's bank.
    #[error("counter {index} does not exist, bank has {size} counters")]
    InvalidCounterIndex { index: usize, size: usize },

    /// Attempted to assign a ticket to a counter that is already serving one.
    #[error("counter {index} is already serving {occupant}")]
    CounterOccupied { index: usize, occupant: String },

    /// A ticket number was inserted into the waiting queue twice.
    /// Never expected under correct dispatcher usage.
    #[error("ticket {0} is already in the waiting queue")]
    DuplicateTicket(String),
}
