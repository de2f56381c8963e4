use anyhow::{Context, Result};

use tempo_diagnostic::launcher;
use tempo_diagnostic::logging;
use tempo_diagnostic::model::config::LoggingConfig;

fn main() -> Result<()> {
    let (log_config, config_err) = LoggingConfig::load();
    let _guard = logging::init("launcher.log", &log_config.filter)?;

    tracing::info!("tempo-diagnostic launcher starting");
    if let Some(err) = config_err {
        tracing::warn!("ignoring user config: {err:#}");
    }

    let script = launcher::launch().context("failed to open the diagnostic terminal")?;
    tracing::info!("launched {}", script.display());

    Ok(())
}
