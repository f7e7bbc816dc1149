//! In-memory adapters for the directory ports.

mod advertisement_store;
mod availability_register;
mod eviction;
mod health;

pub use advertisement_store::TtlAdvertisementStore;
pub use availability_register::InMemoryAvailabilityRegister;
pub use eviction::EvictionTask;
pub use health::UnknownHealth;
