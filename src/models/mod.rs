//! Data models for the appointment service

pub mod claims;
pub mod order;
pub mod requests;
pub mod slot;

// Re-export commonly used types
pub use claims::CallerClaims;
pub use order::OrderAppointmentRow;
pub use slot::{AvailabilityResult, BusySlotMap, BusyWindow, Commitment, SourceType, TimeWindow};
