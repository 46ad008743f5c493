use std::io::IsTerminal;

use engine::Store;
use settings::Settings;
use shell::Shell;

use crate::error::{AppError, Result};

mod error;
mod render;
mod settings;
mod shell;

fn main() -> Result<()> {
    let settings = Settings::new()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!(
            "spendlog={level},engine={level}",
            level = settings.level
        ))
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;

    let store = Store::builder().path(&settings.file).build();
    if store.initialize()? {
        tracing::info!("Started a new expense file at {}", settings.file);
    }

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    Shell::new(store, std::io::stdin().lock(), stdout.lock())
        .color(color)
        .run()?;

    Ok(())
}
