//! Shared API types used by server handlers and clients.
//!
//! These types define the wire contract. Domain types stay free of
//! serialization concerns; responses are built from snapshots here, which is
//! also where appointment ordering is applied.

use serde::{Deserialize, Serialize};

use crate::scheduler::{Appointment, Schedule};

// ============================================================================
// Requests
// ============================================================================

/// Request to create a new schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub owner_name: String,
}

/// Request to admit a new appointment to a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub start_time: i64,
    pub end_time: i64,
}

// ============================================================================
// Responses
// ============================================================================

/// An appointment as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: u64,
    pub schedule_id: u64,
    pub start_time: i64,
    pub end_time: i64,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            schedule_id: appointment.schedule_id,
            start_time: appointment.start_time,
            end_time: appointment.end_time,
        }
    }
}

/// A schedule as it appears on the wire, appointments sorted by start time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub id: u64,
    pub owner_name: String,
    pub appointments: Vec<AppointmentResponse>,
}

impl From<&Schedule> for ScheduleResponse {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id,
            owner_name: schedule.owner_name.clone(),
            appointments: schedule
                .ordered_appointments()
                .into_iter()
                .map(AppointmentResponse::from)
                .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
