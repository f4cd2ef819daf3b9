//! Per-tick systems, run by the engine in a fixed order.

pub mod resolve;
pub mod snapshot;
