//! Availability aggregator: merges active commitments from every record
//! source into a per-date busy-slot map.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::task::JoinSet;

use crate::{
    error::AppError,
    models::BusySlotMap,
    sources::RecordSource,
};

/// A source slower than this is treated as failed rather than stalling
/// the whole resolution.
const SOURCE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct AvailabilityAggregator {
    sources: Vec<Arc<dyn RecordSource>>,
}

impl AvailabilityAggregator {
    pub fn new(sources: Vec<Arc<dyn RecordSource>>) -> Self {
        Self { sources }
    }

    /// Collect all active commitments in [start, end], grouped per date
    /// and sorted by window start within each date.
    ///
    /// The source fetches run concurrently. A failing source loses only
    /// its own contribution: one flow's outage must not block bookings
    /// in the others, so the merge carries on with whatever arrived.
    pub async fn busy_slots(&self, start: NaiveDate, end: NaiveDate) -> BusySlotMap {
        let mut tasks = JoinSet::new();
        for source in &self.sources {
            let source = Arc::clone(source);
            tasks.spawn(async move {
                let result =
                    match tokio::time::timeout(SOURCE_TIMEOUT, source.list_active_in_range(start, end))
                        .await
                    {
                        Ok(result) => result,
                        Err(_) => Err(AppError::Internal(format!(
                            "source timed out after {:?}",
                            SOURCE_TIMEOUT
                        ))),
                    };
                (source.source_type(), result)
            });
        }

        let mut map = BusySlotMap::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(commitments))) => {
                    for commitment in commitments {
                        map.entry(commitment.date).or_default().push(commitment);
                    }
                }
                Ok((source_type, Err(e))) => {
                    tracing::warn!(
                        source = source_type.as_str(),
                        "source fetch failed, continuing without it: {}",
                        e
                    );
                }
                Err(e) => {
                    tracing::warn!("source task panicked, continuing without it: {}", e);
                }
            }
        }

        // Stable sort: simultaneous commitments on the same window keep
        // their arrival order and are never deduplicated, so operators
        // can see a double-booking.
        for bucket in map.values_mut() {
            bucket.sort_by_key(|c| c.window.start);
        }
        map
    }
}
