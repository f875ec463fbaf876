//! Orders repository (delivery appointments)

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::order::OrderAppointmentRow};

/// Statuses that release an order's delivery slot
const INACTIVE_STATUSES: [&str; 2] = ["cancelled", "rejected"];

#[derive(Clone)]
pub struct OrdersRepository {
    pool: Pool<Postgres>,
}

impl OrdersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List orders with an active delivery appointment in the inclusive
    /// date range, customer names resolved in the same query.
    pub async fn list_active_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<OrderAppointmentRow>> {
        let rows = sqlx::query_as::<_, OrderAppointmentRow>(
            r#"
            SELECT o.id, o.delivery_date, o.delivery_time, o.status,
                   c.name AS customer_name, o.product_name, o.crea_date
            FROM orders o
            LEFT JOIN customers c ON o.customer_id = c.id
            WHERE o.delivery_date >= $1
              AND o.delivery_date <= $2
              AND o.status <> ALL($3)
            ORDER BY o.delivery_date, o.delivery_time
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(&INACTIVE_STATUSES[..])
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
