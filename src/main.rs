use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;

use ahp_weights::adapters::{FileJudgmentStore, FileResultSink};
use ahp_weights::application::{ComputeWeightsCommand, ComputeWeightsHandler};
use ahp_weights::config::AppConfig;
use ahp_weights::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging);

    if let Err(err) = config.validate() {
        error!(error = %err, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    let engine = match config.weight_engine() {
        Ok(engine) => engine,
        Err(err) => {
            error!(error = %err, "Invalid hierarchy configuration");
            return ExitCode::FAILURE;
        }
    };

    let handler = ComputeWeightsHandler::new(
        Arc::new(FileJudgmentStore::new()),
        Arc::new(FileResultSink::new(&config.output.path)),
        engine,
    );

    let command = ComputeWeightsCommand {
        sources: config.experts.expert_sources(),
    };

    match handler.handle(command).await {
        Ok(result) => {
            println!("{}", result.run.table.report());
            println!("Results written to {}", config.output.path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Weight computation failed");
            ExitCode::FAILURE
        }
    }
}
