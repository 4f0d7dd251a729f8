//! Appointment tools
//!
//! Confirmation stubs: the engine's job is routing the request to the right
//! handler, and the downstream calendar integration consumes the confirmed
//! detail strings these produce.

use crate::tools::registry::Tool;
use crate::types::Result;
use async_trait::async_trait;

/// Books a new appointment slot.
pub struct ScheduleAppointmentTool;

#[async_trait]
impl Tool for ScheduleAppointmentTool {
    fn name(&self) -> &str {
        "schedule_appointment"
    }

    fn description(&self) -> &str {
        "Book a new appointment. Input: the appointment details (who, when, purpose)."
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        Ok(format!("Appointment scheduled: {}", input))
    }
}

/// Moves an existing appointment to a new slot.
pub struct RescheduleAppointmentTool;

#[async_trait]
impl Tool for RescheduleAppointmentTool {
    fn name(&self) -> &str {
        "reschedule_appointment"
    }

    fn description(&self) -> &str {
        "Move an existing appointment. Input: which appointment and the new time."
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        Ok(format!("Appointment rescheduled: {}", input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schedule_confirms_details() {
        let tool = ScheduleAppointmentTool;
        let output = tool.invoke("dentist on Tuesday at 3pm").await.unwrap();
        assert_eq!(output, "Appointment scheduled: dentist on Tuesday at 3pm");
    }

    #[tokio::test]
    async fn test_reschedule_confirms_details() {
        let tool = RescheduleAppointmentTool;
        let output = tool.invoke("move my dentist visit to Friday").await.unwrap();
        assert_eq!(
            output,
            "Appointment rescheduled: move my dentist visit to Friday"
        );
    }
}
