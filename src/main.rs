//! Headless dashboard run: sample agent, demo walkthrough, simulation,
//! gap analysis and draft export.

use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use disclosure_pilot::adapters::{
    LocalDocumentStore, LoggingPresenter, SimulatedDriveCatalog, TextExportService,
};
use disclosure_pilot::application::{DashboardController, DashboardDependencies};
use disclosure_pilot::config::{AppConfig, LoggingConfig};
use disclosure_pilot::domain::dashboard::DashboardEvent;

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging);

    let deps = DashboardDependencies {
        presenter: Arc::new(LoggingPresenter::new()),
        catalog: Arc::new(SimulatedDriveCatalog::new()),
        exporter: Arc::new(TextExportService::new()),
        store: Arc::new(LocalDocumentStore::new(config.export.output_dir.clone())),
        provider_factory: None,
    };
    let controller = DashboardController::new(deps, &config);

    controller.connect_sample().await?;
    controller.dispatch(DashboardEvent::StartDemo).await?;
    controller.dispatch(DashboardEvent::RunSimulation).await?;

    if let Some(series) = controller.state().await.latest_series {
        println!("{}", serde_json::to_string_pretty(&series)?);
    }

    controller.dispatch(DashboardEvent::StartGapAnalysis).await?;
    controller.dispatch(DashboardEvent::ExportDraft).await?;

    if let Some(stored) = controller.last_export().await {
        info!(path = %stored.path.display(), bytes = stored.size_bytes, "Draft written");
    }
    Ok(())
}
