//! The service hall: every category's dispatcher behind one lock each.

use serde::Serialize;
use tokio::sync::Mutex;

use crate::config::HallConfig;
use crate::engine::{Admission, Completion, DispatchEvent, EngineError, QueueDispatcher, QueueStatus};
use crate::ticket::Category;

/// Per-category headline numbers for overview displays.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueueSummary {
    pub category: Category,
    pub waiting: usize,
    pub busy_counters: usize,
    pub total_counters: usize,
}

/// All categories of the branch, explicitly constructed and owned by
/// whoever runs the process.
///
/// Each category's (sequencer, queue, bank) triple sits behind a
/// single mutex, so an `admit`'s idle-counter check and assignment are
/// atomic with respect to concurrent `dispatch`/`complete` calls on
/// the same category. Categories share no state and never contend
/// with each other.
pub struct ServiceHall {
    teller: Mutex<QueueDispatcher>,
    customer_service: Mutex<QueueDispatcher>,
}

impl ServiceHall {
    pub fn new(config: &HallConfig) -> Self {
        Self {
            teller: Mutex::new(QueueDispatcher::new(
                Category::Teller,
                config.category(Category::Teller),
            )),
            customer_service: Mutex::new(QueueDispatcher::new(
                Category::CustomerService,
                config.category(Category::CustomerService),
            )),
        }
    }

    fn lane(&self, category: Category) -> &Mutex<QueueDispatcher> {
        match category {
            Category::Teller => &self.teller,
            Category::CustomerService => &self.customer_service,
        }
    }

    /// Draw a ticket for a walk-in customer.
    pub async fn admit(&self, category: Category, name: &str) -> Result<Admission, EngineError> {
        self.lane(category).lock().await.admit(name)
    }

    /// Call waiting tickets to idle counters.
    pub async fn dispatch(&self, category: Category) -> Result<Vec<DispatchEvent>, EngineError> {
        self.lane(category).lock().await.dispatch()
    }

    /// Finish service at a counter.
    pub async fn complete(
        &self,
        category: Category,
        counter: usize,
    ) -> Result<Completion, EngineError> {
        self.lane(category).lock().await.complete(counter)
    }

    /// Counters and waiting queue of one category.
    pub async fn status(&self, category: Category) -> QueueStatus {
        self.lane(category).lock().await.status()
    }

    /// Headline numbers for every category.
    pub async fn summaries(&self) -> Vec<QueueSummary> {
        let mut summaries = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let dispatcher = self.lane(category).lock().await;
            summaries.push(QueueSummary {
                category,
                waiting: dispatcher.waiting_count(),
                busy_counters: dispatcher.busy_counters(),
                total_counters: dispatcher.counter_count(),
            });
        }
        summaries
    }
}
