//! Dashboard state machine.
//!
//! - `view` - pages, agent status, source documents and chat messages
//! - `state` - the full dashboard state
//! - `event` - events in, effects out
//! - `transition` - the pure `(state, event) -> (state, effects)` function

mod event;
mod state;
mod transition;
mod view;

pub use event::{DashboardEvent, Effect};
pub use state::{DashboardState, SimulationInputs};
pub use transition::{category_control, transition, Transition, CARBON_PRICE_CONTROL, FORECAST_LABEL};
pub use view::{
    AgentStatus, ChatMessage, ConnectMode, DocumentOrigin, Sender, SourceDocument, View,
};
