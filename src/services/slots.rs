//! Slot resolver: answers "what can I book on date D?"

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{AvailabilityResult, BusySlotMap, BusyWindow},
    services::{availability::AvailabilityAggregator, calendar::SlotCalendar},
};

/// Message returned for closure days. A closed day is a normal empty
/// result, never an error.
const CLOSED_MESSAGE: &str = "Hafta sonları kapalıyız";

#[derive(Clone)]
pub struct SlotsService {
    calendar: SlotCalendar,
    aggregator: AvailabilityAggregator,
}

impl SlotsService {
    pub fn new(calendar: SlotCalendar, aggregator: AvailabilityAggregator) -> Self {
        Self {
            calendar,
            aggregator,
        }
    }

    pub fn calendar(&self) -> &SlotCalendar {
        &self.calendar
    }

    /// Partition the canonical windows of one date into available and
    /// busy.
    ///
    /// A window is busy when a commitment occupies exactly that window;
    /// bookings are taken in canonical-window units, so partial overlaps
    /// are not modeled. A window is listed available only when it is
    /// neither busy nor past. A busy window stays listed even when past,
    /// with its commitments, for the admin view; a past free window is
    /// simply absent from both lists.
    pub async fn resolve(&self, date: NaiveDate, now: DateTime<Utc>) -> AvailabilityResult {
        if self.calendar.is_closed_day(date) {
            return AvailabilityResult {
                date,
                available_windows: Vec::new(),
                busy_windows: Vec::new(),
                is_weekend: true,
                message: Some(CLOSED_MESSAGE.to_string()),
            };
        }

        let mut map = self.aggregator.busy_slots(date, date).await;
        let bucket = map.remove(&date).unwrap_or_default();

        let mut available_windows = Vec::new();
        let mut busy_windows = Vec::new();
        for &window in self.calendar.canonical_windows() {
            let commitments: Vec<_> = bucket
                .iter()
                .filter(|c| c.window == window)
                .cloned()
                .collect();
            if !commitments.is_empty() {
                busy_windows.push(BusyWindow {
                    window,
                    commitments,
                });
            } else if !self.calendar.is_past_window(date, window, now) {
                available_windows.push(window);
            }
        }

        AvailabilityResult {
            date,
            available_windows,
            busy_windows,
            is_weekend: false,
            message: None,
        }
    }

    /// Multi-day busy map for the admin calendar; same aggregation
    /// engine, range instead of single day.
    pub async fn busy_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<BusySlotMap> {
        if end < start {
            return Err(AppError::Validation(
                "endDate must not precede startDate".to_string(),
            ));
        }
        Ok(self.aggregator.busy_slots(start, end).await)
    }
}
