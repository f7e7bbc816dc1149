//! Port contracts for the federation directory.
//!
//! Ports define infrastructure-agnostic interfaces used by directory
//! services and by external collaborators such as advertisers, health
//! monitors and redirectors.

pub mod advertisement_store;
pub mod availability_register;
pub mod health;

pub use advertisement_store::AdvertisementStore;
pub use availability_register::AvailabilityRegister;
pub use health::HealthStatusSource;
