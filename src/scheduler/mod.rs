//! Schedule and appointment management.
//!
//! The store owns every schedule and its appointments; the admission service
//! decides whether a proposed appointment may join a schedule without
//! overlapping an existing one.
//!
//! # Usage
//!
//! ```ignore
//! let store = ScheduleStore::new();
//!
//! let schedule = store.create_schedule("Tyrion Lannister").await;
//!
//! // Admit an appointment (validated against existing ones)
//! let appointment = store.admit_appointment(schedule.id, 5, 9).await?;
//!
//! // Read it back, sorted by start time
//! let schedule = store.get_schedule(schedule.id).await?;
//! let ordered = schedule.ordered_appointments();
//! ```

pub mod error;
pub mod schedule;
pub mod service;
pub mod store;

pub use error::{Result, SchedulerError};
pub use schedule::{Appointment, AppointmentId, Schedule, ScheduleId};
pub use service::validate_appointment;
pub use store::ScheduleStore;
