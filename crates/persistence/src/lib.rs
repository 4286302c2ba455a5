//! Storage for the operations dashboard
//!
//! Holds guest-request tasks and the staff roster. The only backend today is
//! in-memory; the `TaskStore` trait is the seam for a persistent one.

pub mod staff;
pub mod tasks;

pub use staff::default_roster;
pub use tasks::{InMemoryTaskStore, TaskStore};
