//! Moving-requests adapter (key-value store, scan-and-filter)

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{is_inactive_status, parse_record_date, RecordSource, UNKNOWN_CUSTOMER};
use crate::{
    error::AppResult,
    models::{requests::MovingRequestRecord, Commitment, SourceType, TimeWindow},
    services::kv::KvStore,
};

const KEY_PREFIX: &str = "moving:";

#[derive(Clone)]
pub struct MovingSource {
    store: KvStore,
    /// First canonical window; historical records without a time field
    /// still occupy a slot and default here.
    default_window: TimeWindow,
}

impl MovingSource {
    pub fn new(store: KvStore, default_window: TimeWindow) -> Self {
        Self {
            store,
            default_window,
        }
    }

    fn decode(values: Vec<String>) -> Vec<MovingRequestRecord> {
        values
            .into_iter()
            .filter_map(|v| match serde_json::from_str(&v) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("undecodable moving record, skipping: {}", e);
                    None
                }
            })
            .collect()
    }

    pub(crate) fn normalize(
        records: Vec<MovingRequestRecord>,
        start: NaiveDate,
        end: NaiveDate,
        default_window: TimeWindow,
    ) -> Vec<Commitment> {
        let mut commitments = Vec::new();
        for record in records {
            if is_inactive_status(record.status.as_deref()) {
                continue;
            }
            let Some(date) = parse_record_date(record.appointment_date.as_deref()) else {
                tracing::warn!(id = %record.id, "moving request without appointmentDate, skipping");
                continue;
            };
            if date < start || date > end {
                continue;
            }
            let window = match record.appointment_time.as_deref() {
                None => default_window,
                Some(raw) => match TimeWindow::parse(raw) {
                    Some(w) => w,
                    None => {
                        tracing::warn!(
                            id = %record.id,
                            appointment_time = raw,
                            "moving request with malformed appointmentTime, skipping"
                        );
                        continue;
                    }
                },
            };
            let detail = match (record.from_district, record.to_district) {
                (Some(from), Some(to)) => format!("{} → {}", from, to),
                (Some(from), None) => from,
                (None, Some(to)) => to,
                (None, None) => String::new(),
            };
            commitments.push(Commitment {
                date,
                window,
                source_type: SourceType::Moving,
                owner_id: record.id,
                customer_label: record
                    .customer_name
                    .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
                detail_label: detail,
            });
        }
        commitments
    }
}

#[async_trait]
impl RecordSource for MovingSource {
    fn source_type(&self) -> SourceType {
        SourceType::Moving
    }

    async fn list_active_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Commitment>> {
        let values = self.store.scan_prefix(KEY_PREFIX).await?;
        Ok(Self::normalize(
            Self::decode(values),
            start,
            end,
            self.default_window,
        ))
    }
}
