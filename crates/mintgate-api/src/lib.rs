//! Mintgate-api: HTTP API layer for Mintgate
//!
//! Provides the RESTful surface a static mint front end talks to.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::AppState;
