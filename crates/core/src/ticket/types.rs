//! Core ticket data types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A service category with its own numbering sequence, waiting queue
/// and counter bank. Categories share nothing with each other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Teller counters (deposits, withdrawals, transfers).
    Teller,
    /// Customer service counters (accounts, complaints, inquiries).
    CustomerService,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 2] = [Category::Teller, Category::CustomerService];

    /// Canonical name, used for config keys, API paths and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Teller => "teller",
            Category::CustomerService => "customer_service",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teller" => Ok(Category::Teller),
            "customer_service" | "customer-service" => Ok(Category::CustomerService),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// The customer a ticket was drawn for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    /// Unique identifier, assigned at admission.
    pub id: Uuid,
    /// Name as given at the entrance kiosk.
    pub name: String,
}

impl Customer {
    /// Create a customer record with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A unique, ordered claim on service within one category.
///
/// Tickets are immutable: they are created once at admission, move
/// between the waiting queue and a counter, and are dropped when the
/// serving counter completes. The display code is frozen at creation
/// so later prefix reconfiguration never rewrites issued tickets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    /// Sequence number, strictly positive and monotonically increasing
    /// for the lifetime of the category.
    pub number: u64,
    /// Display code shown to the customer, e.g. "A 003".
    pub code: String,
    /// Category this ticket was drawn in.
    pub category: Category,
    /// Who drew the ticket.
    pub customer: Customer,
    /// When the ticket was drawn. Informational only.
    pub issued_at: DateTime<Utc>,
}

impl Ticket {
    /// Build a ticket for the given sequence number.
    ///
    /// The code is the category prefix followed by the zero-padded
    /// number, three digits wide ("A 003"; four-digit numbers widen
    /// naturally).
    pub fn new(number: u64, category: Category, prefix: &str, customer: Customer) -> Self {
        Self {
            number,
            code: format!("{} {:03}", prefix, number),
            category,
            customer,
            issued_at: Utc::now(),
        }
    }
}
