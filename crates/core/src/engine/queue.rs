//! FIFO waiting queue.

use std::collections::VecDeque;

use crate::ticket::Ticket;

use super::EngineError;

/// Ordered holding area for tickets not yet assigned to a counter.
///
/// Insertion order is arrival order is service order. No reordering,
/// no priorities. Invariant: a ticket appears at most once, and never
/// while it occupies a counter (the dispatcher removes it before
/// assignment).
#[derive(Debug, Default)]
pub struct WaitingQueue {
    tickets: VecDeque<Ticket>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ticket to the tail.
    ///
    /// Inserting a number that is already queued is an internal
    /// consistency fault and is rejected without mutating the queue.
    pub fn enqueue(&mut self, ticket: Ticket) -> Result<(), EngineError> {
        if self.tickets.iter().any(|t| t.number == ticket.number) {
            return Err(EngineError::DuplicateTicket(ticket.code));
        }
        self.tickets.push_back(ticket);
        Ok(())
    }

    /// The ticket with the smallest sequence number currently queued,
    /// i.e. the head of the FIFO order. Does not remove it.
    pub fn peek_oldest(&self) -> Option<&Ticket> {
        self.tickets.front()
    }

    /// Remove a specific ticket by number. Returns the removed ticket,
    /// or `None` if no such ticket is queued.
    pub fn remove(&mut self, number: u64) -> Option<Ticket> {
        let position = self.tickets.iter().position(|t| t.number == number)?;
        self.tickets.remove(position)
    }

    /// Arrival-ordered read-only view for display.
    pub fn snapshot(&self) -> Vec<Ticket> {
        self.tickets.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
