pub mod config;
pub mod engine;
pub mod hall;
pub mod metrics;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, validate_config, CategoryConfig, Config, ConfigError,
    HallConfig, ServerConfig,
};
pub use engine::{
    Admission, Completion, CounterBank, CounterSnapshot, DispatchEvent, EngineError,
    QueueDispatcher, QueueStatus, WaitingQueue,
};
pub use hall::{QueueSummary, ServiceHall};
pub use ticket::{Category, Customer, Ticket, TicketSequencer, UnknownCategory};
