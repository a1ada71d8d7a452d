//! In-memory appointment repository
//!
//! Non-durable storage for development and tests. Ids are assigned from a
//! monotonically increasing counter starting at 1.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use citynext_core::AppointmentRepository;
use citynext_domain::{
    Appointment, CalendarDate, CityNextError, NewAppointment, Rejection, Result as DomainResult,
};
use parking_lot::RwLock;

#[derive(Debug, Default)]
struct Store {
    by_date: HashMap<CalendarDate, Appointment>,
    last_id: i64,
}

/// Process-local implementation of `AppointmentRepository`
#[derive(Debug, Default)]
pub struct InMemoryAppointmentRepository {
    store: RwLock<Store>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.read().by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn create(&self, appointment: NewAppointment) -> DomainResult<Appointment> {
        let mut store = self.store.write();

        if store.by_date.contains_key(&appointment.visit_date) {
            return Err(CityNextError::Rejected(Rejection::DuplicateDate));
        }

        store.last_id += 1;
        let stored = appointment.into_appointment(store.last_id, Utc::now().trunc_subsecs(0));
        store.by_date.insert(stored.visit_date, stored.clone());
        Ok(stored)
    }

    async fn get_by_date(&self, date: CalendarDate) -> DomainResult<Option<Appointment>> {
        Ok(self.store.read().by_date.get(&date).cloned())
    }

    async fn exists_for_date(&self, date: CalendarDate) -> DomainResult<bool> {
        Ok(self.store.read().by_date.contains_key(&date))
    }
}
