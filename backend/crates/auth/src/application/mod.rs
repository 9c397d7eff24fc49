//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod password;
pub mod register;
pub mod session;
pub mod sign_in;
pub mod update_profile;

// Re-exports
pub use config::AuthConfig;
pub use password::{ChangePasswordUseCase, RequestPasswordResetUseCase, ResetPasswordUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use session::SessionUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use update_profile::{UpdateProfileOutput, UpdateProfileUseCase};
