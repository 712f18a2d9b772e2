use std::path::Path;

use anyhow::{Context, Result, bail};
use carnot_cycle::CycleInputs;
use tracing::debug;

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => bail!(
                "Unsupported config file extension: {} (expected .toml, .json, .yaml, or .yml)",
                path.display()
            ),
        }
    }
}

/// Loads cycle inputs from a config file.
pub fn load_inputs(path: &Path) -> Result<CycleInputs> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let inputs = parse_inputs(&content, format)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    debug!(path = %path.display(), ?format, "loaded cycle inputs");
    Ok(inputs)
}

/// Parses cycle inputs from config file content.
pub fn parse_inputs(content: &str, format: ConfigFormat) -> Result<CycleInputs> {
    let inputs = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(inputs)
}
