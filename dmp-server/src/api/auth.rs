//! Auth API handlers: registration, admin registration and login

use axum::extract::State;
use axum::{Json, http::StatusCode};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{AdminCreate, AuthResponse, LoginRequest, Role, UserCreate};

use crate::auth::password;
use crate::db::users;
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 8;

fn validate_registration(name: &str, email: &str, password: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("name must not be empty").with_detail("field", "name"));
    }
    if !email.contains('@') {
        return Err(AppError::validation("invalid email address").with_detail("field", "email"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }
    Ok(())
}

async fn create_account(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
    phone: Option<&str>,
    role: Role,
) -> AppResult<AuthResponse> {
    validate_registration(name, email, password)?;

    if users::email_exists(&state.pool, email)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
    {
        return Err(AppError::new(ErrorCode::EmailExists));
    }

    let hash = password::hash_password(password)?;
    let user = users::create(&state.pool, name, email, phone, role, &hash)
        .await
        .map_err(|e| {
            // Losing the insert race on the unique email index reads the
            // same as the precheck firing
            if e.as_database_error()
                .is_some_and(|d| d.is_unique_violation())
            {
                AppError::new(ErrorCode::EmailExists)
            } else {
                AppError::database(e.to_string())
            }
        })?;

    tracing::info!(user_id = user.id, ?role, "account created");

    let token = state
        .jwt
        .generate_token(&user)
        .map_err(|e| AppError::internal(e.to_string()))?;
    Ok(AuthResponse { token, user })
}

/// POST /api/auth/register - create a customer account
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let response = create_account(
        &state,
        &payload.name,
        &payload.email,
        &payload.password,
        payload.phone.as_deref(),
        Role::Customer,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/admin - create an admin account, gated by the admin secret
pub async fn register_admin(
    State(state): State<AppState>,
    Json(payload): Json<AdminCreate>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    if payload.admin_secret != state.admin_secret {
        return Err(AppError::new(ErrorCode::AdminSecretInvalid));
    }

    let response = create_account(
        &state,
        &payload.name,
        &payload.email,
        &payload.password,
        payload.phone.as_deref(),
        Role::Admin,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let row = users::find_by_email(&state.pool, &payload.email)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(AppError::invalid_credentials)?;

    if !password::verify_password(&payload.password, &row.password_hash) {
        return Err(AppError::invalid_credentials());
    }

    let user = row.into_user();
    let token = state
        .jwt
        .generate_token(&user)
        .map_err(|e| AppError::internal(e.to_string()))?;
    Ok(Json(AuthResponse { token, user }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_validation() {
        assert!(validate_registration("Jane", "jane@example.com", "longenough").is_ok());

        let err = validate_registration("", "jane@example.com", "longenough").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err = validate_registration("Jane", "not-an-email", "longenough").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err = validate_registration("Jane", "jane@example.com", "short").unwrap_err();
        assert_eq!(err.code, ErrorCode::PasswordTooShort);
    }
}
