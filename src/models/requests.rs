//! Raw request records stored as JSON in the key-value store.
//!
//! Each struct mirrors the field names its own flow writes; those names are
//! deliberately inconsistent across flows and must not leak past the
//! source adapters.

use serde::Deserialize;

/// A moving-service request (`moving:` prefix)
#[derive(Debug, Clone, Deserialize)]
pub struct MovingRequestRecord {
    pub id: String,
    #[serde(rename = "appointmentDate")]
    pub appointment_date: Option<String>,
    /// Historical records may lack this field entirely
    #[serde(rename = "appointmentTime")]
    pub appointment_time: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "customerName")]
    pub customer_name: Option<String>,
    #[serde(rename = "fromDistrict")]
    pub from_district: Option<String>,
    #[serde(rename = "toDistrict")]
    pub to_district: Option<String>,
}

/// A technical-service request (`service:` prefix)
#[derive(Debug, Clone, Deserialize)]
pub struct TechnicalServiceRecord {
    pub id: String,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub status: Option<String>,
    pub name: Option<String>,
    /// Appliance description ("Arçelik buzdolabı", ...)
    pub device: Option<String>,
}

/// A sell/pickup request (`sell:` prefix)
#[derive(Debug, Clone, Deserialize)]
pub struct SellRequestRecord {
    pub id: String,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub status: Option<String>,
    pub name: Option<String>,
    pub product: Option<String>,
}
