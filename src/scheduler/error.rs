//! Scheduler error types.

use thiserror::Error;

use super::schedule::{AppointmentId, ScheduleId};

/// Errors that can occur when operating on schedules and appointments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    /// Schedule not found.
    #[error("schedule not found: {0}")]
    ScheduleNotFound(ScheduleId),

    /// Appointment not found within an existing schedule.
    #[error("appointment not found: {0}")]
    AppointmentNotFound(AppointmentId),

    /// Candidate range is empty, inverted, or starts at the reserved
    /// zero instant.
    #[error("invalid appointment range [{start}, {end})")]
    InvalidRange { start: i64, end: i64 },

    /// Candidate range shares at least one instant with an existing
    /// appointment. Touching endpoints count.
    #[error("appointment [{start}, {end}) overlaps an existing appointment")]
    OverlapConflict { start: i64, end: i64 },
}

/// Result type for scheduler operations.
pub type Result<T> = std::result::Result<T, SchedulerError>;
