//! External System Integrations
//!
//! Spa bookings go to the PMS; maintenance tickets go to HotSOS.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ticket priority when the caller gives none
pub const DEFAULT_PRIORITY: &str = "medium";

/// Integration errors
#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<IntegrationError> for concierge_core::Error {
    fn from(err: IntegrationError) -> Self {
        match err {
            IntegrationError::InvalidRequest(msg) => concierge_core::Error::InvalidInput(msg),
            other => concierge_core::Error::Integration(other.to_string()),
        }
    }
}

/// Spa booking request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaBooking {
    /// Date, as the guest gave it (e.g. "2024-06-01")
    pub date: String,
    /// Time, as the guest gave it (e.g. "15:00")
    pub time: String,
    /// Treatment name
    pub service: String,
    pub customer_name: String,
}

/// HotSOS ticket request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotSosTicket {
    pub description: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

impl HotSosTicket {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            priority: default_priority(),
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }
}

/// Reject a blank request field
fn require(field: &str, value: &str) -> Result<(), IntegrationError> {
    if value.trim().is_empty() {
        return Err(IntegrationError::InvalidRequest(format!("{} is required", field)));
    }
    Ok(())
}

impl SpaBooking {
    pub fn validate(&self) -> Result<(), IntegrationError> {
        require("date", &self.date)?;
        require("time", &self.time)?;
        require("service", &self.service)?;
        require("customer_name", &self.customer_name)
    }
}

/// PMS/POS integration trait
///
/// Each operation returns a confirmation message suitable for showing to
/// staff or reading back to the guest.
#[async_trait]
pub trait PmsPosIntegration: Send + Sync {
    async fn book_spa_slot(&self, booking: &SpaBooking) -> Result<String, IntegrationError>;

    async fn create_hotsos_task(&self, ticket: &HotSosTicket) -> Result<String, IntegrationError>;
}

/// Mock PMS/POS for development
///
/// Waits a fixed latency, then confirms. Only blank fields are refused.
#[derive(Debug, Clone)]
pub struct MockPmsPos {
    latency: Duration,
}

impl MockPmsPos {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockPmsPos {
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}

#[async_trait]
impl PmsPosIntegration for MockPmsPos {
    async fn book_spa_slot(&self, booking: &SpaBooking) -> Result<String, IntegrationError> {
        booking.validate()?;
        tracing::info!(
            service = %booking.service,
            date = %booking.date,
            time = %booking.time,
            customer = %booking.customer_name,
            "Mock PMS: booking spa slot"
        );
        tokio::time::sleep(self.latency).await;

        Ok(format!(
            "Spa slot for {} on {} at {} for {} confirmed.",
            booking.service, booking.date, booking.time, booking.customer_name
        ))
    }

    async fn create_hotsos_task(&self, ticket: &HotSosTicket) -> Result<String, IntegrationError> {
        require("description", &ticket.description)?;
        tracing::info!(
            description = %ticket.description,
            priority = %ticket.priority,
            "Mock HotSOS: creating task"
        );
        tokio::time::sleep(self.latency).await;

        Ok(format!(
            "HotSOS task '{}' with '{}' priority created successfully.",
            ticket.description, ticket.priority
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> SpaBooking {
        SpaBooking {
            date: "2024-06-01".to_string(),
            time: "15:00".to_string(),
            service: "Swedish Massage".to_string(),
            customer_name: "Ana Silva".to_string(),
        }
    }

    #[tokio::test]
    async fn test_spa_confirmation() {
        let pms = MockPmsPos::new(Duration::ZERO);
        let message = pms.book_spa_slot(&booking()).await.unwrap();
        assert_eq!(
            message,
            "Spa slot for Swedish Massage on 2024-06-01 at 15:00 for Ana Silva confirmed."
        );
    }

    #[tokio::test]
    async fn test_hotsos_default_priority() {
        let pms = MockPmsPos::new(Duration::ZERO);
        let message = pms
            .create_hotsos_task(&HotSosTicket::new("Replace lobby bulb"))
            .await
            .unwrap();
        assert_eq!(
            message,
            "HotSOS task 'Replace lobby bulb' with 'medium' priority created successfully."
        );
    }

    #[tokio::test]
    async fn test_hotsos_priority_passthrough() {
        let pms = MockPmsPos::new(Duration::ZERO);
        let ticket = HotSosTicket::new("Leak in 3F corridor").with_priority("urgent");
        let message = pms.create_hotsos_task(&ticket).await.unwrap();
        assert!(message.contains("'urgent' priority"));
    }

    #[tokio::test]
    async fn test_blank_fields_rejected() {
        let pms = MockPmsPos::new(Duration::ZERO);

        let mut incomplete = booking();
        incomplete.service = "  ".to_string();
        let err = pms.book_spa_slot(&incomplete).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid request: service is required");

        let err = pms.create_hotsos_task(&HotSosTicket::new("")).await.unwrap_err();
        assert!(matches!(err, IntegrationError::InvalidRequest(_)));
    }

    #[test]
    fn test_blank_request_maps_to_invalid_input() {
        let err: concierge_core::Error =
            IntegrationError::InvalidRequest("date is required".to_string()).into();
        assert!(matches!(err, concierge_core::Error::InvalidInput(_)));

        let err: concierge_core::Error =
            IntegrationError::ConnectionFailed("PMS offline".to_string()).into();
        assert_eq!(err.to_string(), "Integration error: Connection failed: PMS offline");
    }

    #[test]
    fn test_ticket_priority_defaults_when_absent() {
        let ticket: HotSosTicket =
            serde_json::from_str(r#"{"description":"Fix AC"}"#).unwrap();
        assert_eq!(ticket.priority, "medium");
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let pms = MockPmsPos::default();
        let start = tokio::time::Instant::now();
        pms.book_spa_slot(&booking()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(200));
    }
}
