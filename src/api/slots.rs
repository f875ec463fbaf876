//! Slot availability endpoints

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};

use crate::{
    error::{AppError, AppResult},
    models::slot::{
        AdminAvailabilityQuery, AdminAvailabilityResponse, AvailableSlotsQuery,
        AvailableSlotsResponse, BusySlotEntry, WorkingHours,
    },
};

use super::AuthenticatedCaller;

fn parse_date(raw: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} (use YYYY-MM-DD)", field)))
}

fn require<'a>(value: &'a Option<String>, field: &str) -> AppResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| AppError::Validation(format!("Missing required parameter: {}", field)))
}

/// Free and taken windows for one date, as the booking wizards consume it
#[utoipa::path(
    get,
    path = "/available-slots",
    tag = "slots",
    security(("bearer_auth" = [])),
    params(AvailableSlotsQuery),
    responses(
        (status = 200, description = "Availability for the date", body = AvailableSlotsResponse),
        (status = 400, description = "Missing or invalid date parameter")
    )
)]
pub async fn available_slots(
    State(state): State<crate::AppState>,
    AuthenticatedCaller(_claims): AuthenticatedCaller,
    Query(query): Query<AvailableSlotsQuery>,
) -> AppResult<Json<AvailableSlotsResponse>> {
    let date = parse_date(require(&query.date, "date")?, "date")?;

    let result = state.services.slots.resolve(date, Utc::now()).await;

    Ok(Json(AvailableSlotsResponse {
        date: result.date.format("%Y-%m-%d").to_string(),
        available_slots: result
            .available_windows
            .iter()
            .map(|w| w.label())
            .collect(),
        busy_slots: result.busy_windows.iter().map(|b| b.window.label()).collect(),
        is_weekend: result.is_weekend,
        message: result.message,
    }))
}

/// Multi-day busy calendar for the back-office view
#[utoipa::path(
    get,
    path = "/admin/availability",
    tag = "slots",
    security(("bearer_auth" = [])),
    params(AdminAvailabilityQuery),
    responses(
        (status = 200, description = "Busy slots over the range", body = AdminAvailabilityResponse),
        (status = 400, description = "Missing or invalid range parameters")
    )
)]
pub async fn admin_availability(
    State(state): State<crate::AppState>,
    AuthenticatedCaller(_claims): AuthenticatedCaller,
    Query(query): Query<AdminAvailabilityQuery>,
) -> AppResult<Json<AdminAvailabilityResponse>> {
    let start = parse_date(require(&query.start_date, "startDate")?, "startDate")?;
    let end = parse_date(require(&query.end_date, "endDate")?, "endDate")?;

    let map = state.services.slots.busy_range(start, end).await?;

    let mut busy_slots: BTreeMap<String, Vec<BusySlotEntry>> = BTreeMap::new();
    for (date, commitments) in &map {
        busy_slots.insert(
            date.format("%Y-%m-%d").to_string(),
            commitments.iter().map(BusySlotEntry::from).collect(),
        );
    }

    let calendar = state.services.slots.calendar();
    let (start_hour, end_hour) = calendar.working_hours();

    Ok(Json(AdminAvailabilityResponse {
        busy_slots,
        working_hours: WorkingHours {
            start: start_hour,
            end: end_hour,
        },
        weekend_closed: calendar.weekend_closed(),
    }))
}
