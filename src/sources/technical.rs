//! Technical-service requests adapter (key-value store, scan-and-filter)

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{is_inactive_status, parse_record_date, RecordSource, UNKNOWN_CUSTOMER};
use crate::{
    error::AppResult,
    models::{requests::TechnicalServiceRecord, Commitment, SourceType, TimeWindow},
    services::kv::KvStore,
};

const KEY_PREFIX: &str = "service:";

#[derive(Clone)]
pub struct TechnicalServiceSource {
    store: KvStore,
}

impl TechnicalServiceSource {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    fn decode(values: Vec<String>) -> Vec<TechnicalServiceRecord> {
        values
            .into_iter()
            .filter_map(|v| match serde_json::from_str(&v) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("undecodable service record, skipping: {}", e);
                    None
                }
            })
            .collect()
    }

    fn normalize(
        records: Vec<TechnicalServiceRecord>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Commitment> {
        let mut commitments = Vec::new();
        for record in records {
            if is_inactive_status(record.status.as_deref()) {
                continue;
            }
            let Some(date) = parse_record_date(record.preferred_date.as_deref()) else {
                tracing::warn!(id = %record.id, "service request without preferred_date, skipping");
                continue;
            };
            if date < start || date > end {
                continue;
            }
            let Some(window) = record.preferred_time.as_deref().and_then(TimeWindow::parse)
            else {
                tracing::warn!(
                    id = %record.id,
                    preferred_time = ?record.preferred_time,
                    "service request without parseable preferred_time, skipping"
                );
                continue;
            };
            commitments.push(Commitment {
                date,
                window,
                source_type: SourceType::TechnicalService,
                owner_id: record.id,
                customer_label: record
                    .name
                    .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
                detail_label: record.device.unwrap_or_default(),
            });
        }
        commitments
    }
}

#[async_trait]
impl RecordSource for TechnicalServiceSource {
    fn source_type(&self) -> SourceType {
        SourceType::TechnicalService
    }

    async fn list_active_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Commitment>> {
        let values = self.store.scan_prefix(KEY_PREFIX).await?;
        Ok(Self::normalize(Self::decode(values), start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(records: Vec<TechnicalServiceRecord>) -> Vec<Commitment> {
        TechnicalServiceSource::normalize(
            records,
            "2024-03-01".parse().unwrap(),
            "2024-03-31".parse().unwrap(),
        )
    }

    fn record(id: &str, date: Option<&str>, time: Option<&str>) -> TechnicalServiceRecord {
        TechnicalServiceRecord {
            id: id.to_string(),
            preferred_date: date.map(String::from),
            preferred_time: time.map(String::from),
            status: Some("pending".to_string()),
            name: Some("Fatma Kaya".to_string()),
            device: Some("Bosch çamaşır makinesi".to_string()),
        }
    }

    #[test]
    fn normalizes_complete_records() {
        let out = normalize(vec![record("s1", Some("2024-03-04"), Some("15:00 - 17:00"))]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].source_type, SourceType::TechnicalService);
        assert_eq!(out[0].detail_label, "Bosch çamaşır makinesi");
    }

    #[test]
    fn missing_time_is_skipped() {
        // Unlike moving requests, a service request needs its time field
        let out = normalize(vec![record("s1", Some("2024-03-04"), None)]);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_date_is_skipped() {
        let out = normalize(vec![record("s1", None, Some("15:00 - 17:00"))]);
        assert!(out.is_empty());
    }
}
