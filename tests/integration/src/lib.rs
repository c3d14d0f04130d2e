//! Scenario tests for the local object store.
//!
//! Each test gets its own temporary storage root, so the tests run in
//! parallel without sharing any files.
//!
//! ```text
//! cargo test -p mockstore-integration
//! ```

use std::sync::Once;

use mockstore_core::{LocalObjectStore, StoreConfig};
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a store rooted in a fresh temporary directory.
///
/// The directory is removed when the returned [`TempDir`] is dropped, so keep
/// it alive for the duration of the test.
#[must_use]
pub fn test_store() -> (TempDir, LocalObjectStore) {
    init_tracing();

    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("failed to create temp dir: {e}"));
    let config = StoreConfig::builder().root(dir.path()).build();
    (dir, LocalObjectStore::new(&config))
}

/// Generate a unique bucket name for a test.
#[must_use]
pub fn test_bucket_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

/// Deterministic content of `len` bytes.
#[must_use]
pub fn test_content(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

mod test_copy;
mod test_layout;
mod test_stream;
