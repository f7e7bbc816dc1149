//! Step definitions for server availability BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
