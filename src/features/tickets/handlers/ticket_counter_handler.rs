use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::tickets::dtos::{
    CurrentCountResponseDto, NextTicketResponseDto, PeriodQuery, ResetCounterResponseDto,
    TicketCounterDto,
};
use crate::features::tickets::models::LocationId;
use crate::features::tickets::services::TicketCounterService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Get the current ticket count for a location
///
/// Read-only. A location with no tickets in the period reports 0.
#[utoipa::path(
    get,
    path = "/tickets/current/{location_id}",
    params(
        ("location_id" = i32, Path, description = "Business location id"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Current counter", body = CurrentCountResponseDto),
        (status = 400, description = "Invalid location id or period"),
        (status = 500, description = "Ticket counter unavailable")
    ),
    tag = "tickets"
)]
pub async fn get_current_count(
    State(service): State<Arc<TicketCounterService>>,
    location_id: LocationId,
    AppQuery(query): AppQuery<PeriodQuery>,
) -> Result<Json<CurrentCountResponseDto>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let snapshot = match query.period()? {
        Some(period) => service.get_current_count_for(location_id, period).await?,
        None => service.get_current_count(location_id).await?,
    };
    Ok(Json(CurrentCountResponseDto::try_from(snapshot)?))
}

/// Issue the next ticket number for a location
#[utoipa::path(
    get,
    path = "/tickets/next/{location_id}",
    params(
        ("location_id" = i32, Path, description = "Business location id")
    ),
    responses(
        (status = 200, description = "Ticket issued", body = NextTicketResponseDto),
        (status = 400, description = "Invalid location id"),
        (status = 500, description = "Ticket counter unavailable")
    ),
    tag = "tickets"
)]
pub async fn get_next_ticket(
    State(service): State<Arc<TicketCounterService>>,
    location_id: LocationId,
) -> Result<Json<NextTicketResponseDto>> {
    let issued = service.get_next_ticket_number(location_id).await?;
    Ok(Json(issued.into()))
}

/// Reset a location's ticket counter
///
/// Zeroes the counter for the current period and flags the manual reset. The next
/// ticket issued for the location is 1.
#[utoipa::path(
    post,
    path = "/tickets/reset/{location_id}",
    params(
        ("location_id" = i32, Path, description = "Business location id")
    ),
    responses(
        (status = 200, description = "Counter reset", body = ResetCounterResponseDto),
        (status = 400, description = "Invalid location id"),
        (status = 500, description = "Ticket counter unavailable")
    ),
    tag = "tickets"
)]
pub async fn reset_ticket_counter(
    State(service): State<Arc<TicketCounterService>>,
    location_id: LocationId,
) -> Result<Json<ResetCounterResponseDto>> {
    let counter = service.reset_ticket_counter(location_id).await?;
    Ok(Json(ResetCounterResponseDto::try_from(counter)?))
}

/// List a location's counters by period, newest first
#[utoipa::path(
    get,
    path = "/tickets/history/{location_id}",
    params(
        ("location_id" = i32, Path, description = "Business location id"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Counter history", body = ApiResponse<Vec<TicketCounterDto>>),
        (status = 400, description = "Invalid location id"),
        (status = 500, description = "Ticket counter unavailable")
    ),
    tag = "tickets"
)]
pub async fn list_counter_history(
    State(service): State<Arc<TicketCounterService>>,
    location_id: LocationId,
    AppQuery(pagination): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<TicketCounterDto>>>> {
    let (counters, total) = service.list_history(location_id, &pagination).await?;
    let counters = counters.into_iter().map(TicketCounterDto::from).collect();

    Ok(Json(ApiResponse::success(
        Some(counters),
        None,
        Some(Meta { total }),
    )))
}
