//! Order models (delivery appointments, PostgreSQL)

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One order row with its delivery appointment, customer name pre-joined
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderAppointmentRow {
    pub id: i32,
    /// Delivery date; NULL when no appointment was taken yet
    pub delivery_date: Option<NaiveDate>,
    /// Window string as stored, e.g. "11:00 - 13:00"
    pub delivery_time: Option<String>,
    pub status: String,
    /// Resolved from the customers table; NULL when the FK dangles
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
}
