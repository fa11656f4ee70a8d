//! Tool registry and invocation records

pub mod registry;
pub mod trace;
