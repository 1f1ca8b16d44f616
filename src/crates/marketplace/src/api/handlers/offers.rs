//! Offer CRUD endpoint handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::api::{
    error::{ApiError, ApiResult},
    middleware::validation::{ensure_matching_id, parse_id},
    models::offer::{OfferPayload, OfferResponse},
    response,
    routes::AppState,
};
use crate::db::repositories::OfferRepository;

/// List every offer
///
/// GET /offers
pub async fn list_offers(State(app_state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let offers = OfferRepository::list(app_state.db.pool()).await?;
    let responses: Vec<OfferResponse> = offers.into_iter().map(OfferResponse::from_db_offer).collect();
    Ok(response::ok(responses))
}

/// Create a new offer
///
/// POST /offers
pub async fn create_offer(
    State(app_state): State<AppState>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let req: OfferPayload = serde_json::from_slice(&body)?;
    let (id, offer) = req.into_parts();

    let created = OfferRepository::create(app_state.db.pool(), id, &offer).await?;

    tracing::info!("Created offer: {}", created.id);
    Ok(response::created(format!("/offers/{}", created.id)))
}

/// Get a single offer by ID
///
/// GET /offers/:id
pub async fn get_offer(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "offer")?;

    let offer = OfferRepository::get_by_id(app_state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Offer not found: {}", id)))?;

    Ok(response::ok(OfferResponse::from_db_offer(offer)))
}

/// Replace every field of an existing offer
///
/// PUT /offers/:id
pub async fn update_offer(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "offer")?;
    let req: OfferPayload = serde_json::from_slice(&body)?;
    let (body_id, offer) = req.into_parts();
    ensure_matching_id(body_id, id)?;

    OfferRepository::update(app_state.db.pool(), id, &offer)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Offer not found: {}", id)))?;

    tracing::info!("Updated offer: {}", id);
    Ok(response::acknowledged())
}

/// Delete an offer
///
/// DELETE /offers/:id
pub async fn delete_offer(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "offer")?;

    if !OfferRepository::delete(app_state.db.pool(), id).await? {
        return Err(ApiError::NotFound(format!("Offer not found: {}", id)));
    }

    tracing::info!("Deleted offer: {}", id);
    Ok(response::acknowledged())
}
