//! Storage Adapters
//!
//! - **SimulatedDriveCatalog** - In-memory stand-in for the shared drive folder

mod simulated_drive_catalog;

pub use simulated_drive_catalog::{SimulatedDriveCatalog, DRIVE_STANDARDS, SAMPLE_STANDARDS};
