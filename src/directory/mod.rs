//! Federation directory: who is alive, what they serve, and whether they
//! may receive traffic.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and the availability state machine in [`domain`]
//! - Port contracts for the store, register and health source in [`ports`]
//! - In-memory and HTTP adapters in [`adapters`]
//! - Listing and toggle orchestration in [`services`]
//!
//! The advertisement store and the availability register are separate
//! ownership domains keyed by the same canonical server URL. Entries in the
//! store expire on their own; records in the register change only through
//! toggles, so a disable decision outlives the advertisement it targeted.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
