//! HTTP Handlers

use axum::Json;
use kernel::extract::ApiJson;
use axum::extract::State;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordUseCase, RegisterInput, RegisterUseCase, RequestPasswordResetUseCase,
    ResetPasswordUseCase, SessionUseCase, SignInInput, SignInUseCase, UpdateProfileUseCase,
};
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
    ProfileResponse, RegisterRequest, ResetPasswordRequest, SessionStatusResponse,
    UpdateProfileRequest, ValidateRequest, ValidateResponse,
};
use crate::validation::{FormInput, validate_form};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register / Login / Logout
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(MessageResponse::ok(output.message)))
}

/// POST /api/auth/login
///
/// Also records the user as signed in.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    SessionUseCase::new(state.repo.clone())
        .set_user(Some(&output.user))
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        token: output.token,
        user: output.user,
    }))
}

/// POST /api/auth/logout
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    SessionUseCase::new(state.repo.clone()).logout().await?;
    Ok(Json(MessageResponse::ok("Sessão encerrada.")))
}

/// GET /api/auth/session
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<SessionStatusResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let user = SessionUseCase::new(state.repo.clone()).current_user().await?;
    Ok(Json(SessionStatusResponse {
        authenticated: user.is_some(),
        user,
    }))
}

// ============================================================================
// Passwords
// ============================================================================

/// POST /api/auth/password/forgot
pub async fn forgot_password<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<ForgotPasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let message = RequestPasswordResetUseCase::new(state.config.clone())
        .execute(&req.email)
        .await?;
    Ok(Json(MessageResponse::ok(message)))
}

/// POST /api/auth/password/reset
pub async fn reset_password<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<ResetPasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let message = ResetPasswordUseCase::new(state.config.clone())
        .execute(&req.token, req.new_password)
        .await?;
    Ok(Json(MessageResponse::ok(message)))
}

/// POST /api/auth/password/change
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<ChangePasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let message = ChangePasswordUseCase::new(state.config.clone())
        .execute(req.current_password, req.new_password)
        .await?;
    Ok(Json(MessageResponse::ok(message)))
}

// ============================================================================
// Profile
// ============================================================================

/// PUT /api/auth/profile
///
/// Refreshes the signed-in user as well.
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> AuthResult<Json<ProfileResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(User::new(req.name, req.email)).await?;

    SessionUseCase::new(state.repo.clone())
        .set_user(Some(&output.user))
        .await?;

    Ok(Json(ProfileResponse {
        success: true,
        user: output.user,
        message: output.message.to_string(),
    }))
}

// ============================================================================
// Validation
// ============================================================================

/// POST /api/auth/validate
pub async fn validate(ApiJson(req): ApiJson<ValidateRequest>) -> Json<ValidateResponse> {
    let details = validate_form(&FormInput {
        name: req.name.as_deref(),
        email: req.email.as_deref(),
        password: req.password.as_deref(),
        confirm_password: req.confirm_password.as_deref(),
    });

    Json(ValidateResponse {
        valid: details.is_valid(),
        details,
    })
}
