use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use crate::{
    model::booking::CreateBookingDto,
    server::{
        controller::{ClassFilterQuery, PaginationQuery},
        error::AppError,
        service::booking::BookingService,
        state::AppState,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/{id}", get(get_booking).delete(cancel_booking))
        .route("/{id}/confirm", put(confirm_booking))
}

/// GET /bookings
/// List bookings, newest first, optionally filtered with `?class_id=`.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(filter): Query<ClassFilterQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.events);
    let page = service
        .list(filter.class_id, pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /bookings/{id}
/// Get a single booking.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.events);
    let booking = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// POST /bookings
/// Reserve a seat; the booking starts pending.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(dto): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.events);
    let booking = service.create(dto).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// PUT /bookings/{id}/confirm
/// Confirm a pending booking.
pub async fn confirm_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.events);
    let booking = service.confirm(id).await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// DELETE /bookings/{id}
/// Cancel a booking, releasing its seat.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BookingService::new(&state.db, &state.events);
    let booking = service.cancel(id).await?;

    Ok((StatusCode::OK, Json(booking)))
}
