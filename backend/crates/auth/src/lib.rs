//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Key-value store implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//! - `validation` - Form field checks shared with the front end
//!
//! ## Features
//! - Mock register / login / password reset / password change / profile update
//! - Signed-in user kept under the `user` storage key
//! - Every operation answers after a configurable artificial delay
//!
//! Passwords are accepted and validated but never stored or logged.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;
pub mod validation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::LocalStorageAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
