//! Common test utilities and fixtures for integration tests.
//!
//! Everything runs in memory; no external services are needed.

pub mod fixtures;

use axum_test::TestServer;

use reading_drill_backend::config::Config;
use reading_drill_backend::{router, AppState};

/// Test context holding the server under test.
pub struct TestContext {
    pub state: AppState,
    pub server: TestServer,
}

impl TestContext {
    /// Create a context with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(config);
        let server = TestServer::new(router(state.clone())).expect("failed to start test server");
        Self { state, server }
    }
}
