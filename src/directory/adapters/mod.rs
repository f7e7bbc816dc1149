//! Adapter implementations for the directory ports.

pub mod http;
pub mod memory;
