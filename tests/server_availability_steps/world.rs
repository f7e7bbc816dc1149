//! Shared world state for server availability BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use lodestar::directory::{
    adapters::{
        http::router,
        memory::{InMemoryAvailabilityRegister, TtlAdvertisementStore, UnknownHealth},
    },
    domain::{DisableReason, ServerUrl},
    services::DirectoryService,
};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use tower::ServiceExt;

/// Store type used by the BDD world.
pub type TestStore = TtlAdvertisementStore<DefaultClock>;

/// Service type used by the BDD world.
pub type TestService = DirectoryService<TestStore, InMemoryAvailabilityRegister, UnknownHealth>;

/// Status and decoded JSON body of one control surface response.
pub type RecordedResponse = (StatusCode, Value);

/// Scenario world for server availability behaviour tests.
pub struct AvailabilityWorld {
    pub store: Arc<TestStore>,
    pub service: TestService,
    pub last_response: Option<RecordedResponse>,
}

impl AvailabilityWorld {
    /// Creates a world with an empty store and register.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(TtlAdvertisementStore::new(
            Duration::from_secs(15 * 60),
            Arc::new(DefaultClock),
        ));
        let service = DirectoryService::new(
            Arc::clone(&store),
            Arc::new(InMemoryAvailabilityRegister::new()),
            Arc::new(UnknownHealth),
        );

        Self {
            store,
            service,
            last_response: None,
        }
    }

    /// Replaces the register with one seeded with permanent exclusions.
    pub fn seed_permanently_disabled(&mut self, servers: impl IntoIterator<Item = ServerUrl>) {
        let register = InMemoryAvailabilityRegister::with_records(
            servers
                .into_iter()
                .map(|server| (server, DisableReason::PermDisabled)),
        );
        self.service = DirectoryService::new(
            Arc::clone(&self.store),
            Arc::new(register),
            Arc::new(UnknownHealth),
        );
    }

    /// Sends a request through the router and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read or is not JSON.
    pub async fn send(&self, request: Request<Body>) -> Result<RecordedResponse, eyre::Report> {
        let response = router(self.service.clone()).oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }
}

impl Default for AvailabilityWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AvailabilityWorld {
    AvailabilityWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
