//! Sell/pickup requests adapter (key-value store, scan-and-filter)

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{is_inactive_status, parse_record_date, RecordSource, UNKNOWN_CUSTOMER};
use crate::{
    error::AppResult,
    models::{requests::SellRequestRecord, Commitment, SourceType, TimeWindow},
    services::kv::KvStore,
};

const KEY_PREFIX: &str = "sell:";

#[derive(Clone)]
pub struct SellPickupSource {
    store: KvStore,
}

impl SellPickupSource {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    fn decode(values: Vec<String>) -> Vec<SellRequestRecord> {
        values
            .into_iter()
            .filter_map(|v| match serde_json::from_str(&v) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("undecodable sell record, skipping: {}", e);
                    None
                }
            })
            .collect()
    }

    fn normalize(
        records: Vec<SellRequestRecord>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Commitment> {
        let mut commitments = Vec::new();
        for record in records {
            if is_inactive_status(record.status.as_deref()) {
                continue;
            }
            let Some(date) = parse_record_date(record.pickup_date.as_deref()) else {
                tracing::warn!(id = %record.id, "sell request without pickup_date, skipping");
                continue;
            };
            if date < start || date > end {
                continue;
            }
            let Some(window) = record.pickup_time.as_deref().and_then(TimeWindow::parse) else {
                tracing::warn!(
                    id = %record.id,
                    pickup_time = ?record.pickup_time,
                    "sell request without parseable pickup_time, skipping"
                );
                continue;
            };
            commitments.push(Commitment {
                date,
                window,
                source_type: SourceType::SellPickup,
                owner_id: record.id,
                customer_label: record
                    .name
                    .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
                detail_label: record.product.unwrap_or_default(),
            });
        }
        commitments
    }
}

#[async_trait]
impl RecordSource for SellPickupSource {
    fn source_type(&self) -> SourceType {
        SourceType::SellPickup
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

    fn normalize(records: Vec<SellRequestRecord>) -> Vec<Commitment> {
        SellPickupSource::normalize(
            records,
            "2024-03-01".parse().unwrap(),
            "2024-03-31".parse().unwrap(),
        )
    }

    fn record(id: &str, status: Option<&str>) -> SellRequestRecord {
        SellRequestRecord {
            id: id.to_string(),
            pickup_date: Some("2024-03-05".to_string()),
            pickup_time: Some("17:00 - 19:00".to_string()),
            status: status.map(String::from),
            name: None,
            product: Some("Siemens bulaşık makinesi".to_string()),
        }
    }

    #[test]
    fn active_record_becomes_commitment_with_fallback_label() {
        let out = normalize(vec![record("p1", Some("new"))]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].customer_label, UNKNOWN_CUSTOMER);
        assert_eq!(out[0].source_type, SourceType::SellPickup);
    }

    #[test]
    fn inactive_record_is_dropped() {
        let out = normalize(vec![record("p1", Some("cancelled"))]);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_status_counts_as_active() {
        let out = normalize(vec![record("p1", None)]);
        assert_eq!(out.len(), 1);
    }
}
