pub(crate) mod config;
pub(crate) mod game;
pub(crate) mod games;
pub(crate) mod genres;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::runtime::Runtime;

use crate::error::CliError;

/// Create the tokio runtime commands run their async work on.
pub(crate) fn runtime() -> Result<Runtime, CliError> {
    Runtime::new().map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))
}

/// Spinner in the house style.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static spinner template")
            .tick_chars("/-\\|"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Load the API key, printing setup guidance when it is missing.
pub(crate) fn load_api_key() -> Result<gamedex_api::ApiKey, CliError> {
    gamedex_api::ApiKey::load().map_err(|e| {
        eprintln!("Set the API key via the RAWG_API_KEY environment variable,");
        eprintln!("or run 'gamedex config setup' to store it in the config file.");
        CliError::config(e.to_string())
    })
}
