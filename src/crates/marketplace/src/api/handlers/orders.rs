//! Order CRUD endpoint handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::api::{
    error::{ApiError, ApiResult},
    middleware::validation::{ensure_matching_id, parse_id},
    models::order::{OrderPayload, OrderResponse},
    response,
    routes::AppState,
};
use crate::db::repositories::OrderRepository;

/// List every order
///
/// GET /orders
pub async fn list_orders(State(app_state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let orders = OrderRepository::list(app_state.db.pool()).await?;
    let responses: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from_db_order).collect();
    Ok(response::ok(responses))
}

/// Create a new order
///
/// POST /orders
pub async fn create_order(
    State(app_state): State<AppState>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let req: OrderPayload = serde_json::from_slice(&body)?;
    let (id, order) = req.into_parts()?;

    let created = OrderRepository::create(app_state.db.pool(), id, &order).await?;

    tracing::info!("Created order: {}", created.id);
    Ok(response::created(format!("/orders/{}", created.id)))
}

/// Get a single order by ID
///
/// GET /orders/:id
pub async fn get_order(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "order")?;

    let order = OrderRepository::get_by_id(app_state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order not found: {}", id)))?;

    Ok(response::ok(OrderResponse::from_db_order(order)))
}

/// Replace every field of an existing order
///
/// PUT /orders/:id
pub async fn update_order(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "order")?;
    let req: OrderPayload = serde_json::from_slice(&body)?;
    let (body_id, order) = req.into_parts()?;
    ensure_matching_id(body_id, id)?;

    OrderRepository::update(app_state.db.pool(), id, &order)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order not found: {}", id)))?;

    tracing::info!("Updated order: {}", id);
    Ok(response::acknowledged())
}

/// Delete an order
///
/// DELETE /orders/:id
pub async fn delete_order(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "order")?;

    if !OrderRepository::delete(app_state.db.pool(), id).await? {
        return Err(ApiError::NotFound(format!("Order not found: {}", id)));
    }

    tracing::info!("Deleted order: {}", id);
    Ok(response::acknowledged())
}
