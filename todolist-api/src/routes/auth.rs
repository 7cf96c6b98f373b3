/// Authentication endpoints
///
/// This module provides user authentication endpoints:
/// - Signup
/// - Login
///
/// Both return the same response shape: a single opaque token the client
/// sends back in the `Authorization` header on todo requests.
///
/// # Endpoints
///
/// - `POST /auth/signup` - Create account and get a token
/// - `POST /auth/login` - Authenticate and get a token

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::Json,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use todolist_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, User},
};

/// Signup request
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Email address
    pub email: String,

    /// Password (no strength requirements)
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// Token response, shared by signup and login
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed token, opaque to the client
    pub token: String,
}

/// Signup endpoint
///
/// Creates a new user account and immediately returns a token, so the
/// client can start making authenticated requests without a separate login.
///
/// # Endpoint
///
/// ```text
/// POST /auth/signup
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "hunter2"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Empty email or password
/// - `409 Conflict`: Email already registered
/// - `500 Internal Server Error`: Server error
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<TokenResponse>> {
    if req.email.is_empty() {
        return Err(ApiError::BadRequest("email is required".to_string()));
    }
    if req.password.is_empty() {
        return Err(ApiError::BadRequest("password is required".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;

    // Duplicate email surfaces here as a unique constraint violation,
    // which From<sqlx::Error> maps to 409
    let user = User::create(
        &state.db,
        CreateUser {
            email: req.email,
            password_hash,
        },
    )
    .await?;

    let claims = jwt::Claims::new(user.id);
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    Ok(Json(TokenResponse { token }))
}

/// Login endpoint
///
/// Authenticates a user and returns a fresh token.
///
/// # Endpoint
///
/// ```text
/// POST /auth/login
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "hunter2"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Unknown email or wrong password (indistinguishable)
/// - `500 Internal Server Error`: Server error
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    // Unknown email and wrong password produce the same response, so the
    // endpoint can't be used to probe which emails are registered
    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let claims = jwt::Claims::new(user.id);
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    Ok(Json(TokenResponse { token }))
}
