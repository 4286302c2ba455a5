//! Hotel system integrations
//!
//! The property-management and point-of-sale systems (spa booking, HotSOS
//! ticketing) sit behind the `PmsPosIntegration` trait. Only a mock
//! implementation exists today.

pub mod integrations;

pub use integrations::{
    HotSosTicket, IntegrationError, MockPmsPos, PmsPosIntegration, SpaBooking, DEFAULT_PRIORITY,
};
