//! Disclosure Pilot - AI-assisted SSBJ sustainability disclosure dashboard.
//!
//! The core is the impact projection calculator: carbon price, climate
//! scenario and Scope 3 category reductions in, a profit-impact series for
//! 2025-2050 out. Around it sit the dashboard state machine, the guided demo,
//! AI gap analysis with placeholder fallback and draft export.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
