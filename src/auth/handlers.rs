use axum::{extract::State, routing::post, Json, Router};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{AckResponse, LoginRequest, SignupRequest},
        password,
    },
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    if payload.username.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        warn!("signup with missing fields");
        return Err(ApiError::MissingFields);
    }

    let hash = password::hash_password(&payload.password)?;

    // Uniqueness is the store's job; a duplicate username or email comes
    // back as a unique violation and converts to the conflict error.
    let user = state
        .store
        .insert_user(&payload.username, &payload.email, &hash)
        .await?;

    info!(user_id = user.id, username = %user.username, email = %user.email, "user registered");
    Ok(Json(AckResponse { success: true }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    // Unknown username, failed lookup and wrong password all answer with
    // the same error, so usernames cannot be enumerated.
    let user = match state.store.find_by_username(&payload.username).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(username = %payload.username, "login with unknown username");
            return Err(ApiError::InvalidCredentials);
        }
        Err(e) => {
            error!(error = %e, "user lookup failed");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !password::verify_password(&payload.password, &user.password)? {
        warn!(user_id = user.id, "login with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(AckResponse { success: true }))
}
