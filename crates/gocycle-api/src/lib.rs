//! # GoCycle API
//! 
//! HTTP handlers, session cookie transport, access-control middleware, and routing.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod session;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
