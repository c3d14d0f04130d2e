//! Local-filesystem emulation of object storage data-plane operations.
//!
//! Client code written against an object storage API can run against local
//! disk instead: objects identified by `(bucket, key)` are plain files under
//! `<root>/tmp/mock-object-store/<bucket>/<key>`.
//!
//! # Architecture
//!
//! ```text
//! caller (key, bucket?, options)
//!        |
//!        v
//! LocalObjectStore (store / value / stream / copy / exists / about /
//!                   delete / url_for / find)
//!        |
//!        v
//!   ObjectPaths (bucket + key -> path, pure)
//!        |
//!        v
//!   std::fs
//! ```
//!
//! Every call is synchronous and blocking. There is no cache, no background
//! work, and no locking; same-key concurrency is whatever the filesystem
//! provides.

pub mod chunks;
pub mod config;
pub mod content_type;
pub mod error;
pub mod object;
pub mod path;
pub mod store;
pub mod validation;

pub use config::StoreConfig;
pub use error::{ObjectStoreError, ObjectStoreResult};
pub use object::{ObjectHandle, ObjectMetadata, ObjectOptions, ObjectValue};
pub use store::LocalObjectStore;
