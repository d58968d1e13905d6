use std::env;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use matchplan_lambda_rust::fussball::{self, DEFAULT_TEAM_URL};

fn main() -> ExitCode {
    // stdout is reserved for the schedule itself
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init();

    let team_url = env::var("TEAM_URL").unwrap_or_else(|_| DEFAULT_TEAM_URL.to_string());

    fussball::with_schedule(&team_url, |result| match result {
        Ok(schedule) => match schedule.output() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "Failed to write schedule");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!(error = %e, "Failed to load schedule");
            ExitCode::FAILURE
        }
    })
}
