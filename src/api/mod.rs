//! Txport API Module
//! REST surface for batch transaction lookup and spreadsheet export

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use middleware::start_cleanup_task;
pub use routes::create_router;
pub use types::*;
