//! Check command - Validates the settings without printing them.

use assistant_settings::{ConfigResult, SettingsLoader};

/// Execute the check command
pub fn execute(loader: &SettingsLoader) -> ConfigResult<()> {
    let settings = loader.load()?;
    tracing::info!("settings OK for {}", settings.environment());
    Ok(())
}
