//! Shared test helpers for in-memory board integration tests.

use once_cell::sync::Lazy;
use rstest::fixture;
use std::sync::Arc;
use taskboard::adapters::memory::InMemoryTaskStore;
use taskboard::config::BoardConfig;
use taskboard::services::BoardController;

static TRACING: Lazy<()> = Lazy::new(|| {
    drop(
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init(),
    );
});

/// Installs the test tracing subscriber once per process.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Provides a controller backed by a fresh in-memory store.
#[fixture]
pub fn controller() -> BoardController<InMemoryTaskStore> {
    init_tracing();
    BoardController::new(Arc::new(InMemoryTaskStore::new()), BoardConfig::default())
}

/// Provides a controller alongside the store it shares, for tests that
/// mutate the store behind the controller's back.
#[fixture]
pub fn shared_board() -> (Arc<InMemoryTaskStore>, BoardController<InMemoryTaskStore>) {
    init_tracing();
    let store = Arc::new(InMemoryTaskStore::new());
    let controller = BoardController::new(Arc::clone(&store), BoardConfig::default());
    (store, controller)
}
