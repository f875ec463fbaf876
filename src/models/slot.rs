//! Slot and commitment models (time windows, busy-slot map, availability)

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Matches "HH:MM - HH:MM", with or without spaces around the dash
static WINDOW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*-\s*(\d{1,2}):(\d{2})\s*$").unwrap());

// ---------------------------------------------------------------------------
// TimeWindow
// ---------------------------------------------------------------------------

/// A half-open interval within a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parse a stored window string ("09:00 - 11:00" or "09:00-11:00").
    /// Returns None for anything that does not describe a valid interval.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = WINDOW_RE.captures(s)?;
        let start = NaiveTime::from_hms_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, 0)?;
        let end = NaiveTime::from_hms_opt(caps[3].parse().ok()?, caps[4].parse().ok()?, 0)?;
        if end <= start {
            return None;
        }
        Some(Self { start, end })
    }

    /// Canonical label used on the wire and in stored records
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Commitment
// ---------------------------------------------------------------------------

/// Which record source a commitment was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Order,
    Moving,
    TechnicalService,
    SellPickup,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Order => "order",
            SourceType::Moving => "moving",
            SourceType::TechnicalService => "technical_service",
            SourceType::SellPickup => "sell_pickup",
        }
    }
}

/// A normalized occupied window, derived from one source record.
/// Never persisted; recomputed on every aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commitment {
    pub date: NaiveDate,
    pub window: TimeWindow,
    pub source_type: SourceType,
    pub owner_id: String,
    pub customer_label: String,
    pub detail_label: String,
}

/// Per-date grouping of commitments, sorted by window start within each date
pub type BusySlotMap = BTreeMap<NaiveDate, Vec<Commitment>>;

// ---------------------------------------------------------------------------
// AvailabilityResult
// ---------------------------------------------------------------------------

/// A canonical window that is taken, with the commitments occupying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyWindow {
    pub window: TimeWindow,
    pub commitments: Vec<Commitment>,
}

/// The resolver's answer for a single date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityResult {
    pub date: NaiveDate,
    pub available_windows: Vec<TimeWindow>,
    pub busy_windows: Vec<BusyWindow>,
    pub is_weekend: bool,
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// API request/response shapes
// ---------------------------------------------------------------------------

/// Query parameters for the single-day availability endpoint
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AvailableSlotsQuery {
    /// Date to check (YYYY-MM-DD)
    pub date: Option<String>,
}

/// Single-day availability response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlotsResponse {
    /// Requested date (YYYY-MM-DD)
    pub date: String,
    /// Free windows, "HH:MM - HH:MM", chronological
    pub available_slots: Vec<String>,
    /// Taken windows, "HH:MM - HH:MM", chronological
    pub busy_slots: Vec<String>,
    pub is_weekend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Query parameters for the admin calendar endpoint
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminAvailabilityQuery {
    /// Range start (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Range end (YYYY-MM-DD)
    pub end_date: Option<String>,
}

/// One busy slot in the admin calendar view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusySlotEntry {
    pub start_time: String,
    pub end_time: String,
    /// Originating source ("order", "moving", ...)
    #[serde(rename = "type")]
    pub source_type: String,
    pub id: String,
    pub customer: String,
    pub details: String,
}

/// Operating hours summary for the admin calendar
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

/// Multi-day admin availability response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminAvailabilityResponse {
    /// Date (YYYY-MM-DD) -> busy slots on that date
    pub busy_slots: BTreeMap<String, Vec<BusySlotEntry>>,
    pub working_hours: WorkingHours,
    pub weekend_closed: bool,
}

impl From<&Commitment> for BusySlotEntry {
    fn from(c: &Commitment) -> Self {
        Self {
            start_time: c.window.start.format("%H:%M").to_string(),
            end_time: c.window.end.format("%H:%M").to_string(),
            source_type: c.source_type.as_str().to_string(),
            id: c.owner_id.clone(),
            customer: c.customer_label.clone(),
            details: c.detail_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_spaced_and_compact_forms() {
        let spaced = TimeWindow::parse("09:00 - 11:00").unwrap();
        let compact = TimeWindow::parse("09:00-11:00").unwrap();
        assert_eq!(spaced, compact);
        assert_eq!(spaced.label(), "09:00 - 11:00");
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        assert!(TimeWindow::parse("").is_none());
        assert!(TimeWindow::parse("morning").is_none());
        assert!(TimeWindow::parse("09:00").is_none());
        assert!(TimeWindow::parse("25:00 - 27:00").is_none());
        // end before start is not an interval
        assert!(TimeWindow::parse("11:00 - 09:00").is_none());
    }

    #[test]
    fn label_round_trips() {
        let w = TimeWindow::parse("13:00 - 15:00").unwrap();
        assert_eq!(TimeWindow::parse(&w.label()), Some(w));
    }
}
