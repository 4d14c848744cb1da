//! Per-category orchestration of sequencer, queue and counter bank.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::CategoryConfig;
use crate::metrics;
use crate::ticket::{Category, Customer, Ticket, TicketSequencer};

use super::{CounterBank, CounterSnapshot, EngineError, WaitingQueue};

/// Outcome of admitting a customer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Admission {
    /// The ticket that was drawn.
    pub ticket: Ticket,
    /// The counter the ticket was seated at directly, or `None` when
    /// it joined the waiting queue.
    pub assigned_counter: Option<usize>,
}

/// One ticket called from the waiting queue to a counter.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DispatchEvent {
    pub ticket: Ticket,
    pub counter: usize,
}

/// Outcome of completing service at a counter.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Completion {
    /// The counter was serving a ticket; it is now idle.
    Served { counter: usize, ticket: Ticket },
    /// The counter was already idle. Nothing to do.
    AlreadyEmpty { counter: usize },
}

/// Read-only view of one category's counters and waiting queue.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueueStatus {
    pub counters: Vec<CounterSnapshot>,
    pub waiting: Vec<Ticket>,
}

/// The allocation state machine for one category.
///
/// Owns the category's sequencer, waiting queue and counter bank. One
/// concrete dispatcher serves every category; only the prefix and the
/// bank size differ, and both come from [`CategoryConfig`].
///
/// State machine per ticket:
///
/// ```text
/// Created -> DirectlyAssigned -> Completed
/// Created -> Waiting -> Assigned -> Completed
/// ```
///
/// `Waiting -> Assigned` happens only in [`dispatch`](Self::dispatch),
/// `Assigned -> Completed` only in [`complete`](Self::complete). No
/// ticket is ever re-queued.
#[derive(Debug)]
pub struct QueueDispatcher {
    category: Category,
    prefix: String,
    sequencer: TicketSequencer,
    queue: WaitingQueue,
    bank: CounterBank,
}

impl QueueDispatcher {
    pub fn new(category: Category, config: &CategoryConfig) -> Self {
        Self {
            category,
            prefix: config.prefix.clone(),
            sequencer: TicketSequencer::new(),
            queue: WaitingQueue::new(),
            bank: CounterBank::new(config.counters),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Draw a ticket for a customer. The only ticket-creation entry
    /// point; sequence numbers are never generated anywhere else.
    ///
    /// If a counter is idle at arrival time the ticket is seated there
    /// directly and never enters the waiting queue. The sequencer
    /// advances either way.
    pub fn admit(&mut self, name: &str) -> Result<Admission, EngineError> {
        let number = self.sequencer.next();
        let ticket = Ticket::new(number, self.category, &self.prefix, Customer::new(name));

        match self.bank.find_idle() {
            Some(counter) => {
                self.bank.assign(counter, ticket.clone())?;
                info!(
                    category = %self.category,
                    code = %ticket.code,
                    counter,
                    "ticket seated directly"
                );
                metrics::TICKETS_ISSUED
                    .with_label_values(&[self.category.as_str(), "direct"])
                    .inc();
                Ok(Admission {
                    ticket,
                    assigned_counter: Some(counter),
                })
            }
            None => {
                self.queue.enqueue(ticket.clone()).map_err(|e| {
                    warn!(category = %self.category, error = %e, "admission rejected");
                    e
                })?;
                info!(
                    category = %self.category,
                    code = %ticket.code,
                    position = self.queue.len(),
                    "ticket queued"
                );
                metrics::TICKETS_ISSUED
                    .with_label_values(&[self.category.as_str(), "waiting"])
                    .inc();
                Ok(Admission {
                    ticket,
                    assigned_counter: None,
                })
            }
        }
    }

    /// Call waiting tickets to idle counters, oldest ticket first,
    /// lowest counter first, until either runs out.
    ///
    /// Idempotent: with no idle counter or an empty queue this is a
    /// no-op. Each idle counter receives at most one ticket per
    /// invocation. Never triggered implicitly by `complete`; refilling
    /// counters is always a separate caller-initiated step.
    pub fn dispatch(&mut self) -> Result<Vec<DispatchEvent>, EngineError> {
        let mut calls = Vec::new();

        while let Some(counter) = self.bank.find_idle() {
            let Some(ticket) = self.queue.peek_oldest().cloned() else {
                break;
            };
            self.bank.assign(counter, ticket.clone())?;
            let removed = self.queue.remove(ticket.number);
            debug_assert!(removed.is_some(), "dispatched ticket was not in the queue");

            info!(
                category = %self.category,
                code = %ticket.code,
                counter,
                "ticket called to counter"
            );
            metrics::DISPATCH_ASSIGNMENTS
                .with_label_values(&[self.category.as_str()])
                .inc();
            calls.push(DispatchEvent { ticket, counter });
        }

        if calls.is_empty() {
            debug!(category = %self.category, "dispatch: nothing to do");
        }
        Ok(calls)
    }

    /// Finish service at a counter.
    ///
    /// An idle counter is a benign no-op ([`Completion::AlreadyEmpty`]);
    /// an out-of-range index is rejected without touching any state.
    /// Counters are not refilled here; see [`dispatch`](Self::dispatch).
    pub fn complete(&mut self, counter: usize) -> Result<Completion, EngineError> {
        match self.bank.release(counter) {
            Ok(Some(ticket)) => {
                info!(
                    category = %self.category,
                    code = %ticket.code,
                    counter,
                    "service completed"
                );
                metrics::SERVICES_COMPLETED
                    .with_label_values(&[self.category.as_str()])
                    .inc();
                Ok(Completion::Served { counter, ticket })
            }
            Ok(None) => {
                debug!(category = %self.category, counter, "complete on idle counter");
                metrics::COMPLETIONS_NOOP
                    .with_label_values(&[self.category.as_str()])
                    .inc();
                Ok(Completion::AlreadyEmpty { counter })
            }
            Err(e) => {
                warn!(category = %self.category, counter, error = %e, "complete rejected");
                metrics::REJECTED_OPERATIONS
                    .with_label_values(&[self.category.as_str(), "invalid_index"])
                    .inc();
                Err(e)
            }
        }
    }

    /// Pure read of counters and waiting queue.
    pub fn status(&self) -> QueueStatus {
        QueueStatus {
            counters: self.bank.status(),
            waiting: self.queue.snapshot(),
        }
    }

    pub fn waiting_count(&self) -> usize {
        self.queue.len()
    }

    pub fn busy_counters(&self) -> usize {
        self.bank.busy_count()
    }

    pub fn counter_count(&self) -> usize {
        self.bank.size()
    }
}
