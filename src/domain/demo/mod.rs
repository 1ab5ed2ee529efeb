//! Scripted demo walkthrough.
//!
//! The demo is data: an ordered list of delayed actions. The application layer
//! sleeps and dispatches; nothing here knows about timers.

mod script;

pub use script::{DemoAction, DemoScript, DemoStep};
