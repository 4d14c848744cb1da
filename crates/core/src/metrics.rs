//! Prometheus metrics for the allocation engine.
//!
//! Counters are incremented by the dispatcher as operations happen;
//! the waiting/busy gauges are refreshed by the scrape path from hall
//! snapshots.

use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, IntGaugeVec, Opts};

/// Tickets issued by admission path.
pub static TICKETS_ISSUED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("loket_tickets_issued_total", "Total tickets issued"),
        &["category", "path"], // "direct", "waiting"
    )
    .unwrap()
});

/// Waiting tickets called to a counter by dispatch.
pub static DISPATCH_ASSIGNMENTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "loket_dispatch_assignments_total",
            "Waiting tickets moved to an idle counter",
        ),
        &["category"],
    )
    .unwrap()
});

/// Services completed at a counter.
pub static SERVICES_COMPLETED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("loket_services_completed_total", "Total services completed"),
        &["category"],
    )
    .unwrap()
});

/// Completions against an already-idle counter (benign no-ops).
pub static COMPLETIONS_NOOP: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "loket_completions_noop_total",
            "Complete calls that found the counter already idle",
        ),
        &["category"],
    )
    .unwrap()
});

/// Operations rejected by the engine.
pub static REJECTED_OPERATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "loket_rejected_operations_total",
            "Operations rejected by the engine",
        ),
        &["category", "reason"], // "invalid_index"
    )
    .unwrap()
});

/// Tickets currently waiting (collected dynamically).
pub static WAITING_TICKETS: Lazy<IntGaugeVec> = Lazy::new(|| {
    IntGaugeVec::new(
        Opts::new("loket_waiting_tickets", "Tickets currently waiting"),
        &["category"],
    )
    .unwrap()
});

/// Counters currently serving (collected dynamically).
pub static COUNTERS_BUSY: Lazy<IntGaugeVec> = Lazy::new(|| {
    IntGaugeVec::new(
        Opts::new("loket_counters_busy", "Counters currently serving a ticket"),
        &["category"],
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(TICKETS_ISSUED.clone()),
        Box::new(DISPATCH_ASSIGNMENTS.clone()),
        Box::new(SERVICES_COMPLETED.clone()),
        Box::new(COMPLETIONS_NOOP.clone()),
        Box::new(REJECTED_OPERATIONS.clone()),
        Box::new(WAITING_TICKETS.clone()),
        Box::new(COUNTERS_BUSY.clone()),
    ]
}
