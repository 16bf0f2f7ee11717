//! API module for HTTP endpoints
//!
//! This module exposes the deal store to the presentation layer as read-only JSON.

pub mod http;
pub mod rest;
pub mod state;

pub use http::{bind, create_router, serve};
pub use state::AppState;
