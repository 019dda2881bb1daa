//! Schedule and appointment data structures.

use std::collections::HashMap;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a schedule.
pub type ScheduleId = u64;

/// Unique identifier for an appointment. Global, not per schedule.
pub type AppointmentId = u64;

// ============================================================================
// Schedule
// ============================================================================

/// A named container of non-overlapping appointments.
///
/// Created empty; only its appointment collection ever changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Unique identifier, assigned at creation.
    pub id: ScheduleId,
    /// Free-text owner name.
    pub owner_name: String,
    /// Appointments keyed by their identifier.
    pub appointments: HashMap<AppointmentId, Appointment>,
}

impl Schedule {
    /// Appointments sorted ascending by start time, ties broken by
    /// identifier so the order is fully deterministic.
    ///
    /// Empty schedules yield an empty vector, never an absent one.
    pub fn ordered_appointments(&self) -> Vec<Appointment> {
        let mut appointments: Vec<Appointment> = self.appointments.values().cloned().collect();
        appointments.sort_by_key(|a| (a.start_time, a.id));
        appointments
    }
}

// ============================================================================
// Appointment
// ============================================================================

/// An immutable half-open time interval `[start_time, end_time)` owned by
/// exactly one schedule.
///
/// Times are opaque instants on a monotonic integer axis; 0 is reserved as
/// the "unset" sentinel and never a valid start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    /// Unique identifier, assigned at admission.
    pub id: AppointmentId,
    /// The schedule this appointment belongs to.
    pub schedule_id: ScheduleId,
    /// First instant covered by the appointment.
    pub start_time: i64,
    /// First instant no longer covered.
    pub end_time: i64,
}

// ============================================================================
// Tests
// ============================================================================
