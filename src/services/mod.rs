//! Business logic services

pub mod availability;
pub mod calendar;
pub mod kv;
pub mod slots;

use std::sync::Arc;

use crate::{
    config::BookingConfig,
    error::AppResult,
    repository::Repository,
    sources::{
        moving::MovingSource, orders::OrdersSource, sell::SellPickupSource,
        technical::TechnicalServiceSource, RecordSource,
    },
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub slots: slots::SlotsService,
}

impl Services {
    /// Wire the calendar, the four record sources and the aggregator.
    /// New booking flows register here; the merge logic stays untouched.
    pub fn new(
        repository: Repository,
        kv_store: kv::KvStore,
        booking: &BookingConfig,
    ) -> AppResult<Self> {
        let calendar = calendar::SlotCalendar::from_config(booking)?;

        let sources: Vec<Arc<dyn RecordSource>> = vec![
            Arc::new(OrdersSource::new(repository)),
            Arc::new(MovingSource::new(kv_store.clone(), calendar.first_window())),
            Arc::new(TechnicalServiceSource::new(kv_store.clone())),
            Arc::new(SellPickupSource::new(kv_store)),
        ];
        let aggregator = availability::AvailabilityAggregator::new(sources);

        Ok(Self {
            slots: slots::SlotsService::new(calendar, aggregator),
        })
    }
}
