//! RunSimulationHandler - Computes an impact projection for one request.

use tokio::time::sleep;
use tracing::debug;

use crate::config::PacingConfig;
use crate::domain::simulation::{ImpactCalculator, ImpactSeries, ScenarioParameters};

/// Command to project the impact series for a snapshot of the controls.
#[derive(Debug, Clone)]
pub struct RunSimulationCommand {
    /// Request number; the result carries it back so stale runs can be dropped.
    pub generation: u64,
    pub parameters: ScenarioParameters,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSimulationResult {
    pub generation: u64,
    pub series: ImpactSeries,
}

pub struct RunSimulationHandler {
    pacing: PacingConfig,
}

impl RunSimulationHandler {
    pub fn new(pacing: PacingConfig) -> Self {
        Self { pacing }
    }

    pub async fn handle(&self, cmd: RunSimulationCommand) -> RunSimulationResult {
        sleep(self.pacing.simulation_delay()).await;

        let series = ImpactCalculator::project(&cmd.parameters);
        debug!(
            generation = cmd.generation,
            carbon_price = cmd.parameters.carbon_price,
            scenario = %cmd.parameters.scenario_id,
            active_categories = cmd.parameters.active_category_count,
            "Impact series computed"
        );

        RunSimulationResult {
            generation: cmd.generation,
            series,
        }
    }
}
