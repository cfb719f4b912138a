//! Show the effective configuration

use pawnkyc::config::KycConfig;
use pawnkyc::output::OutputMode;

/// Print the loaded configuration
pub fn show_config(config: &KycConfig, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Human => print!("{}", toml::to_string_pretty(config)?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}
