//! Appointment admission rules.
//!
//! Pure validation of a candidate appointment against a schedule. The store
//! calls this inside its write lock so that validation and commit form one
//! critical section.

use super::error::{Result, SchedulerError};
use super::schedule::{Appointment, Schedule};

/// Check whether a candidate `[start, end)` may be admitted to `schedule`.
///
/// Rejects empty and inverted ranges, a start at the reserved zero instant,
/// and any range that is not disjoint from every existing appointment.
/// A shared boundary instant counts as overlap: an appointment ending at 8
/// conflicts with one starting at 8.
pub fn validate_appointment(schedule: &Schedule, start: i64, end: i64) -> Result<()> {
    if start >= end || start == 0 {
        return Err(SchedulerError::InvalidRange { start, end });
    }

    for existing in schedule.appointments.values() {
        if conflicts(existing, start, end) {
            return Err(SchedulerError::OverlapConflict { start, end });
        }
    }

    Ok(())
}

/// True when the candidate range shares at least one instant with `existing`,
/// touching endpoints included.
fn conflicts(existing: &Appointment, start: i64, end: i64) -> bool {
    start <= existing.end_time && end >= existing.start_time
}

// ============================================================================
// Tests
// ============================================================================
