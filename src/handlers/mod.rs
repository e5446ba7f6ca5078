//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the health surface.
//!
//! ## Available Handlers
//!
//! - **Health** (`health`) - Composite health, liveness and readiness probes,
//!   plus the service metadata root

mod health;

pub use health::*;
