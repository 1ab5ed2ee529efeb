//! Financial impact simulation.
//!
//! - `calculator` - the pure projection formula
//! - `scenario` - closed set of climate scenarios and base impacts
//! - `parameters` - inputs extracted from the simulation controls
//! - `impact` - the immutable output series
//! - `scope3` - Scope 3 categories and reduction sliders

mod calculator;
mod impact;
mod parameters;
mod scenario;
mod scope3;

pub use calculator::{ImpactCalculator, MAX_DAMPING};
pub use impact::{ImpactPoint, ImpactSeries, PROJECTION_YEARS};
pub use parameters::{ScenarioParameters, DEFAULT_CARBON_PRICE, DEFAULT_SCENARIO_ID};
pub use scenario::ClimateScenario;
pub use scope3::{ActiveCategories, CategoryReduction, Scope3Category};
