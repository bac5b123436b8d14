//! Host capabilities backing the resolution tiers.
//!
//! The resolver itself only speaks to two seams: a read-only resource bundle
//! and a persistent key-value store. Both are traits so tests (and embedders)
//! can supply their own.

pub mod bundle;
pub mod storage;

pub use bundle::{DirBundle, HttpBundle, ResourceBundle};
pub use storage::{JsonFileStore, KeyValueStore};
