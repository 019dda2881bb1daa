//! In-memory schedule store.
//!
//! Owns every schedule and appointment for the lifetime of the process and
//! hands out cloned snapshots. A single lock guards the whole store:
//! mutations (including the admission scan) run under the write lock, so two
//! concurrent admissions against the same schedule cannot both pass
//! validation. Nothing awaits while the lock is held.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::error::{Result, SchedulerError};
use super::schedule::{Appointment, AppointmentId, Schedule, ScheduleId};
use super::service;

/// Store for schedules and their appointments.
///
/// Thread-safe and cheap to clone; clones share the same state.
#[derive(Clone, Default)]
pub struct ScheduleStore {
    inner: Arc<RwLock<ScheduleStoreInner>>,
}

#[derive(Default)]
struct ScheduleStoreInner {
    /// Schedules by ID.
    schedules: HashMap<ScheduleId, Schedule>,
    /// Count of schedules ever created. The next schedule ID.
    /// Never decremented, so IDs are not reused after deletion.
    schedules_created: u64,
    /// Count of appointments ever created, across all schedules.
    appointments_created: u64,
}

impl ScheduleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a new, empty schedule. Never fails.
    pub async fn create_schedule(&self, owner_name: impl Into<String>) -> Schedule {
        let mut inner = self.inner.write().await;

        inner.schedules_created += 1;
        let schedule = Schedule {
            id: inner.schedules_created,
            owner_name: owner_name.into(),
            appointments: HashMap::new(),
        };
        inner.schedules.insert(schedule.id, schedule.clone());

        debug!(schedule_id = schedule.id, "Created schedule");
        schedule
    }

    /// Get a schedule by ID.
    pub async fn get_schedule(&self, id: ScheduleId) -> Result<Schedule> {
        let inner = self.inner.read().await;
        inner
            .schedules
            .get(&id)
            .cloned()
            .ok_or(SchedulerError::ScheduleNotFound(id))
    }

    /// Remove a schedule and all of its appointments, returning the
    /// pre-deletion snapshot.
    pub async fn delete_schedule(&self, id: ScheduleId) -> Result<Schedule> {
        let mut inner = self.inner.write().await;
        let schedule = inner
            .schedules
            .remove(&id)
            .ok_or(SchedulerError::ScheduleNotFound(id))?;

        debug!(schedule_id = id, "Deleted schedule");
        Ok(schedule)
    }

    /// Validate and commit a candidate appointment `[start, end)`.
    ///
    /// Lookup, validation, ID assignment, and insertion all happen under one
    /// write lock, so a committed appointment was checked against every
    /// appointment visible at commit time.
    pub async fn admit_appointment(
        &self,
        schedule_id: ScheduleId,
        start: i64,
        end: i64,
    ) -> Result<Appointment> {
        let mut inner = self.inner.write().await;
        let ScheduleStoreInner {
            schedules,
            appointments_created,
            ..
        } = &mut *inner;

        let schedule = schedules
            .get_mut(&schedule_id)
            .ok_or(SchedulerError::ScheduleNotFound(schedule_id))?;

        service::validate_appointment(schedule, start, end)?;

        *appointments_created += 1;
        let appointment = Appointment {
            id: *appointments_created,
            schedule_id,
            start_time: start,
            end_time: end,
        };
        schedule.appointments.insert(appointment.id, appointment.clone());

        debug!(
            schedule_id,
            appointment_id = appointment.id,
            start,
            end,
            "Admitted appointment"
        );
        Ok(appointment)
    }

    /// Get an appointment by ID within a schedule.
    ///
    /// Distinguishes a missing schedule from a missing appointment so the
    /// caller can report which one was not found.
    pub async fn get_appointment(
        &self,
        schedule_id: ScheduleId,
        appointment_id: AppointmentId,
    ) -> Result<Appointment> {
        let inner = self.inner.read().await;
        let schedule = inner
            .schedules
            .get(&schedule_id)
            .ok_or(SchedulerError::ScheduleNotFound(schedule_id))?;

        schedule
            .appointments
            .get(&appointment_id)
            .cloned()
            .ok_or(SchedulerError::AppointmentNotFound(appointment_id))
    }

    /// Remove an appointment from a schedule, returning it.
    ///
    /// Same lookup semantics as [`ScheduleStore::get_appointment`].
    pub async fn delete_appointment(
        &self,
        schedule_id: ScheduleId,
        appointment_id: AppointmentId,
    ) -> Result<Appointment> {
        let mut inner = self.inner.write().await;
        let schedule = inner
            .schedules
            .get_mut(&schedule_id)
            .ok_or(SchedulerError::ScheduleNotFound(schedule_id))?;

        let appointment = schedule
            .appointments
            .remove(&appointment_id)
            .ok_or(SchedulerError::AppointmentNotFound(appointment_id))?;

        debug!(schedule_id, appointment_id, "Deleted appointment");
        Ok(appointment)
    }
}

// ============================================================================
// Tests
// ============================================================================
