//! The ticket/counter allocation engine.
//!
//! One [`QueueDispatcher`] per category ties together the ticket
//! sequencer, the FIFO waiting queue and the counter bank:
//!
//! ```text
//! admit ──> sequencer.next ──> idle counter?  ──yes──> counter (direct)
//!                                   │no
//!                                   v
//!                             waiting queue ──dispatch──> counter
//!                                                            │
//!                                                        complete
//! ```
//!
//! A ticket never skips a state and never returns to an earlier one.

mod bank;
mod dispatcher;
mod error;
mod queue;

pub use bank::{CounterBank, CounterSnapshot};
pub use dispatcher::{Admission, Completion, DispatchEvent, QueueDispatcher, QueueStatus};
pub use error::EngineError;
pub use queue::WaitingQueue;
