pub mod handlers;
pub mod middleware;
pub mod queues;
pub mod routes;

pub use routes::create_router;
