use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. The terminal UI owns stdout, so events are
/// appended to `log_file`; `RUST_LOG` still refines the filter.
pub fn init(log_file: &Path, debug: bool) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;
    let level = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("ieam_admin={level}").parse()?)
                .add_directive(format!("ieam_core={level}").parse()?),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to install log subscriber: {e}"))?;

    Ok(())
}
