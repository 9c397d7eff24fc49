//! Infrastructure Layer
//!
//! Repository implementations over the injected key-value store.

pub mod local_storage;

pub use local_storage::LocalStorageAuthRepository;
