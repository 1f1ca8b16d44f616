//! User CRUD endpoint handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::api::{
    error::{ApiError, ApiResult},
    middleware::validation::{ensure_matching_id, parse_id},
    models::user::{UserPayload, UserResponse},
    response,
    routes::AppState,
};
use crate::db::repositories::UserRepository;

/// List every user
///
/// GET /users
pub async fn list_users(State(app_state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = UserRepository::list(app_state.db.pool()).await?;
    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from_db_user).collect();
    Ok(response::ok(responses))
}

/// Create a new user
///
/// POST /users
pub async fn create_user(
    State(app_state): State<AppState>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let req: UserPayload = serde_json::from_slice(&body)?;
    let (id, user) = req.into_parts();

    let created = UserRepository::create(app_state.db.pool(), id, &user).await?;

    tracing::info!("Created user: {}", created.id);
    Ok(response::created(format!("/users/{}", created.id)))
}

/// Get a single user by ID
///
/// GET /users/:id
pub async fn get_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "user")?;

    let user = UserRepository::get_by_id(app_state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User not found: {}", id)))?;

    Ok(response::ok(UserResponse::from_db_user(user)))
}

/// Replace every field of an existing user
///
/// PUT /users/:id
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "user")?;
    let req: UserPayload = serde_json::from_slice(&body)?;
    let (body_id, user) = req.into_parts();
    ensure_matching_id(body_id, id)?;

    UserRepository::update(app_state.db.pool(), id, &user)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User not found: {}", id)))?;

    tracing::info!("Updated user: {}", id);
    Ok(response::acknowledged())
}

/// Delete a user
///
/// DELETE /users/:id
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "user")?;

    if !UserRepository::delete(app_state.db.pool(), id).await? {
        return Err(ApiError::NotFound(format!("User not found: {}", id)));
    }

    tracing::info!("Deleted user: {}", id);
    Ok(response::acknowledged())
}
