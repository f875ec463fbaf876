//! Slot calendar: canonical windows, closed days, past-window rule

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::TimeWindow,
};

/// The working-time model of the shop. Stateless; every check is a pure
/// function of the configured constants.
#[derive(Clone)]
pub struct SlotCalendar {
    windows: Vec<TimeWindow>,
    /// ISO weekday numbers (1=Monday .. 7=Sunday)
    closed_weekdays: Vec<u32>,
}

impl SlotCalendar {
    /// Build the calendar from configuration, rejecting window lists that
    /// are empty, unordered or overlapping.
    pub fn from_config(config: &BookingConfig) -> AppResult<Self> {
        let mut windows = Vec::with_capacity(config.windows.len());
        for raw in &config.windows {
            let window = TimeWindow::parse(raw).ok_or_else(|| {
                AppError::Validation(format!("Invalid booking window '{}'", raw))
            })?;
            windows.push(window);
        }
        if windows.is_empty() {
            return Err(AppError::Validation(
                "At least one booking window is required".to_string(),
            ));
        }
        for pair in windows.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(AppError::Validation(format!(
                    "Booking windows '{}' and '{}' overlap or are out of order",
                    pair[0], pair[1]
                )));
            }
        }
        for day in &config.closed_weekdays {
            if !(1..=7).contains(day) {
                return Err(AppError::Validation(format!(
                    "Invalid closed weekday {} (use 1=Monday .. 7=Sunday)",
                    day
                )));
            }
        }
        Ok(Self {
            windows,
            closed_weekdays: config.closed_weekdays.clone(),
        })
    }

    /// The fixed ordered list of operating windows
    pub fn canonical_windows(&self) -> &[TimeWindow] {
        &self.windows
    }

    /// Default window for records that only recorded a date
    pub fn first_window(&self) -> TimeWindow {
        self.windows[0]
    }

    /// Whether the shop is closed on this date (weekday rule only, no
    /// holiday calendar)
    pub fn is_closed_day(&self, date: NaiveDate) -> bool {
        self.closed_weekdays
            .contains(&date.weekday().number_from_monday())
    }

    /// A window is past once its end datetime is strictly before now.
    /// A window ending exactly at now is not past; prior days are
    /// entirely past, future days never are.
    pub fn is_past_window(&self, date: NaiveDate, window: TimeWindow, now: DateTime<Utc>) -> bool {
        date.and_time(window.end) < now.naive_utc()
    }

    /// Overall operating hours (first window start, last window end)
    pub fn working_hours(&self) -> (String, String) {
        let first = self.windows.first().expect("validated non-empty");
        let last = self.windows.last().expect("validated non-empty");
        (
            first.start.format("%H:%M").to_string(),
            last.end.format("%H:%M").to_string(),
        )
    }

    /// True when both weekend days are closure days
    pub fn weekend_closed(&self) -> bool {
        self.closed_weekdays.contains(&6) && self.closed_weekdays.contains(&7)
    }
}
