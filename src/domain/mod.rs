//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `simulation` - Carbon price impact projection
//! - `gap_analysis` - Disclosure gap assessment and comparison rows
//! - `dashboard` - Dashboard state machine
//! - `demo` - Scripted demo walkthrough

pub mod dashboard;
pub mod demo;
pub mod foundation;
pub mod gap_analysis;
pub mod simulation;
