//! Shared plumbing for signup services: tracing setup, liveness check and
//! request-id propagation.

pub mod health;
pub mod middleware;
pub mod tracing;
