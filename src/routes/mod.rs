//! Routes Module
//!
//! Router assembly: the public authentication routes, the bearer-gated
//! note routes, and the CORS layer.

/// Main router creation
pub mod router;

/// Authentication route table
pub mod api_routes;

pub use router::create_router;
