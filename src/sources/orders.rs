//! Orders adapter (relational store, native range query)

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{RecordSource, UNKNOWN_CUSTOMER};
use crate::{
    error::AppResult,
    models::{order::OrderAppointmentRow, Commitment, SourceType, TimeWindow},
    repository::Repository,
};

#[derive(Clone)]
pub struct OrdersSource {
    repository: Repository,
}

impl OrdersSource {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Normalize fetched rows into commitments. Rows without both a date
    /// and a parseable window cannot occupy a slot and are dropped.
    pub(crate) fn normalize(rows: Vec<OrderAppointmentRow>) -> Vec<Commitment> {
        let mut commitments = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(date) = row.delivery_date else {
                tracing::warn!(order_id = row.id, "order without delivery_date, skipping");
                continue;
            };
            let Some(window) = row.delivery_time.as_deref().and_then(TimeWindow::parse) else {
                tracing::warn!(
                    order_id = row.id,
                    delivery_time = ?row.delivery_time,
                    "order without parseable delivery_time, skipping"
                );
                continue;
            };
            commitments.push(Commitment {
                date,
                window,
                source_type: SourceType::Order,
                owner_id: row.id.to_string(),
                customer_label: row
                    .customer_name
                    .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
                detail_label: row.product_name.unwrap_or_default(),
            });
        }
        commitments
    }
}

#[async_trait]
impl RecordSource for OrdersSource {
    fn source_type(&self) -> SourceType {
        SourceType::Order
    }

    async fn list_active_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Commitment>> {
        let rows = self.repository.orders.list_active_in_range(start, end).await?;
        Ok(Self::normalize(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i32, date: Option<&str>, time: Option<&str>) -> OrderAppointmentRow {
        OrderAppointmentRow {
            id,
            delivery_date: date.map(|d| d.parse().unwrap()),
            delivery_time: time.map(String::from),
            status: "confirmed".to_string(),
            customer_name: Some("Ayşe Yılmaz".to_string()),
            product_name: Some("Buzdolabı".to_string()),
            crea_date: None,
        }
    }

    #[test]
    fn normalizes_complete_rows() {
        let out = OrdersSource::normalize(vec![row(7, Some("2024-03-04"), Some("11:00 - 13:00"))]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].owner_id, "7");
        assert_eq!(out[0].window.label(), "11:00 - 13:00");
        assert_eq!(out[0].customer_label, "Ayşe Yılmaz");
    }

    #[test]
    fn skips_rows_missing_date_or_time() {
        let out = OrdersSource::normalize(vec![
            row(1, None, Some("09:00 - 11:00")),
            row(2, Some("2024-03-04"), None),
            row(3, Some("2024-03-04"), Some("soon")),
        ]);
        assert!(out.is_empty());
    }

    #[test]
    fn falls_back_to_generic_customer_label() {
        let mut r = row(4, Some("2024-03-04"), Some("09:00 - 11:00"));
        r.customer_name = None;
        let out = OrdersSource::normalize(vec![r]);
        assert_eq!(out[0].customer_label, UNKNOWN_CUSTOMER);
    }
}
