use anyhow::{Context, Result};

use tempo_diagnostic::collector;
use tempo_diagnostic::logging;
use tempo_diagnostic::model::config::{DiagnosticConfig, LoggingConfig};
use tempo_diagnostic::model::privilege::EffectiveUid;

fn main() -> Result<()> {
    let (log_config, config_err) = LoggingConfig::load();
    let _guard = logging::init("collector.log", &log_config.filter)?;

    tracing::info!("tempo-diagnostic collector starting");
    if let Some(err) = config_err {
        tracing::warn!("ignoring user config: {err:#}");
    }

    let config = DiagnosticConfig::load()?;
    println!("getting info for plugin {}", config.plugin_prefix());

    let summary = collector::run(&config, &EffectiveUid).context("diagnostic run failed")?;

    if summary.failed > 0 {
        println!(
            "{} of {} databases could not be read, see the report for details",
            summary.failed, summary.databases
        );
    }
    println!("done. wrote info to {}", summary.report_path.display());

    Ok(())
}
