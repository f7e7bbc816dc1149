//! Health source used when no health subsystem is attached.

use crate::directory::{
    domain::{HealthStatus, ServerUrl},
    ports::HealthStatusSource,
};

/// Reports [`HealthStatus::Unknown`] for every server.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownHealth;

impl HealthStatusSource for UnknownHealth {
    fn health_of(&self, _server: &ServerUrl) -> HealthStatus {
        HealthStatus::Unknown
    }
}
