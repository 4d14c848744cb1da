//! Fixed-size bank of service counters.

use serde::Serialize;

use crate::ticket::Ticket;

use super::EngineError;

/// One row of the status table: a counter and whoever it is serving.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CounterSnapshot {
    /// 1-based slot index within the bank.
    pub index: usize,
    /// The ticket being served, if any.
    pub occupant: Option<Ticket>,
}

/// A fixed bank of service counters for one category.
///
/// Size is set at construction and never changes. Counters are
/// addressed by 1-based index; each holds at most one ticket.
#[derive(Debug)]
pub struct CounterBank {
    slots: Vec<Option<Ticket>>,
}

impl CounterBank {
    /// Create a bank with `size` idle counters.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// The lowest-indexed idle counter, or `None` when all are busy.
    /// Lowest-index-first is the deterministic tie-break for
    /// assignment order.
    pub fn find_idle(&self) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.is_none())
            .map(|i| i + 1)
    }

    /// Seat a ticket at the given counter.
    pub fn assign(&mut self, index: usize, ticket: Ticket) -> Result<(), EngineError> {
        let slot = self.slot_mut(index)?;
        if let Some(occupant) = slot {
            return Err(EngineError::CounterOccupied {
                index,
                occupant: occupant.code.clone(),
            });
        }
        *slot = Some(ticket);
        Ok(())
    }

    /// Clear the given counter.
    ///
    /// Returns the ticket that was being served, or `Ok(None)` when
    /// the counter was already idle (benign, reported to the caller).
    pub fn release(&mut self, index: usize) -> Result<Option<Ticket>, EngineError> {
        Ok(self.slot_mut(index)?.take())
    }

    /// Read-only snapshot of every counter, in index order.
    pub fn status(&self) -> Vec<CounterSnapshot> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| CounterSnapshot {
                index: i + 1,
                occupant: slot.clone(),
            })
            .collect()
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Number of counters currently serving a ticket.
    pub fn busy_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<Ticket>, EngineError> {
        let size = self.slots.len();
        if index < 1 || index > size {
            return Err(EngineError::InvalidCounterIndex { index, size });
        }
        Ok(&mut self.slots[index - 1])
    }
}
