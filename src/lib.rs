//! Lodestar: directory core of a federated data-distribution network.
//!
//! This crate tracks which origin and cache servers are participating, which
//! namespaces each origin exposes, and whether a server is excluded from
//! traffic routing. Redirectors, health probes and the public API consult it
//! to decide where data requests go.
//!
//! # Architecture
//!
//! Lodestar follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, HTTP)
//!
//! # Modules
//!
//! - [`directory`]: Advertisement registry, indexes, availability and API
//! - [`config`]: TTL, eviction and operator exclusion settings

pub mod config;
pub mod directory;
