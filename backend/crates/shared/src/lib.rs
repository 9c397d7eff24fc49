//! Shared Kernel - vocabulary used by every VaultFlow crate
//!
//! - Unified error type ([`error::app_error::AppError`]) and its classification
//! - Typed record identifiers ([`id::RecordId`])
//! - With the `axum` feature, a JSON extractor rejecting in that error shape
//!
//! Anything placed here must mean the same thing in the auth and card domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

#[cfg(feature = "axum")]
pub mod extract;
