//! Tickets drawn by walk-in customers, one numbering sequence per category.

mod sequencer;
mod types;

pub use sequencer::TicketSequencer;
pub use types::{Category, Customer, Ticket, UnknownCategory};
