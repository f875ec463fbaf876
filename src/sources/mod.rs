//! Record source adapters.
//!
//! One adapter per booking flow. An adapter is the only place that knows
//! its flow's storage technology, field names and status vocabulary; it
//! hands the aggregator fully normalized commitments and nothing else.

pub mod moving;
pub mod orders;
pub mod sell;
pub mod technical;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::{Commitment, SourceType},
};

/// Fallback customer label when a record carries no resolvable name
pub const UNKNOWN_CUSTOMER: &str = "Müşteri";

/// A single booking flow's commitment feed
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    fn source_type(&self) -> SourceType;

    /// All non-cancelled commitments whose date falls in [start, end].
    /// Records missing a usable date or window are skipped, not errors.
    async fn list_active_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Commitment>>;
}

/// Shared inactive-status check for the key-value flows. Naming differs
/// per flow historically but the semantic set is these two outcomes.
pub(crate) fn is_inactive_status(status: Option<&str>) -> bool {
    matches!(status, Some("cancelled") | Some("rejected"))
}

/// Parse a stored "YYYY-MM-DD" date field, None when absent or malformed
pub(crate) fn parse_record_date(raw: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw?, "%Y-%m-%d").ok()
}
