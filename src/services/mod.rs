//! # Health Services
//!
//! ## Available Services
//!
//! - **Probes** (`probes`) - Connectivity probes against the platform dependencies
//! - **Metrics** (`metrics`) - Point-in-time system resource snapshot

pub mod metrics;
pub mod probes;
