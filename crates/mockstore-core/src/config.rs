//! Object store configuration.
//!
//! Provides [`StoreConfig`], the explicit configuration value threaded into
//! the path resolver when a store is constructed. The storage root follows the
//! host's application-root convention: `APP_ROOT` when it is set, otherwise
//! the current working directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Environment variable naming the application root directory.
pub const APP_ROOT_ENV: &str = "APP_ROOT";

/// Bucket used when an operation is called without one.
pub const DEFAULT_BUCKET: &str = "default";

/// Object store configuration.
///
/// Both values are fixed for the lifetime of a store; there is no way to
/// change them on a constructed store.
///
/// # Examples
///
/// ```
/// use mockstore_core::config::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.root.to_str(), Some("."));
/// assert_eq!(config.default_bucket, "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Storage root; objects live under `<root>/tmp/mock-object-store`.
    #[builder(default = PathBuf::from("."), setter(into))]
    pub root: PathBuf,

    /// Bucket name substituted when a caller omits the bucket.
    #[builder(default = String::from(DEFAULT_BUCKET), setter(into))]
    pub default_bucket: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            default_bucket: String::from(DEFAULT_BUCKET),
        }
    }
}

impl StoreConfig {
    /// Load configuration from the environment.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `APP_ROOT` | `.` (current working directory) |
    ///
    /// An empty `APP_ROOT` is treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(root) = parse_app_root(std::env::var(APP_ROOT_ENV).ok().as_deref()) {
            config.root = root;
        }

        config
    }
}

/// Parse the value of `APP_ROOT`; unset or empty means no override.
fn parse_app_root(value: Option<&str>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
