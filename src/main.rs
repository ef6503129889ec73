use std::process::ExitCode;

use clap::Parser;
use sensu_teams_handler::utils::init_logging;
use sensu_teams_handler::{Cli, EventRelay, RelayError, TeamsWebhook};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Environment
    dotenvy::dotenv().ok();

    // 2. Logging
    let _guards = init_logging();

    // 3. Flags
    let config = Cli::parse().into_config();

    // 4. Relay
    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error_code = e.error_code(), "{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: sensu_teams_handler::Config) -> Result<(), RelayError> {
    // Fail on a missing webhook before waiting on stdin
    config.validate()?;

    let sender = TeamsWebhook::from_config(&config)?;
    let relay = EventRelay::new(config, sender);
    relay.run(tokio::io::stdin()).await?;

    Ok(())
}
