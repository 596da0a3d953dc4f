pub mod errors;

use serde::Deserialize;
use std::path::Path;

use errors::ConfigError;

/// Settings read from an optional config file. Every field has a default so
/// the tool runs without one.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: Defaults,
    pub engine: EngineSettings,
    pub csv: CsvSettings,
    pub flatten: FlattenSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub os: String,
    pub batch_os: String,
    pub device_name: String,
    pub cli_parser: String,
    pub table_parser: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            os: "nxos".to_string(),
            batch_os: "ios".to_string(),
            device_name: "Device".to_string(),
            cli_parser: "show interface status".to_string(),
            table_parser: "default".to_string(),
        }
    }
}

/// External parser program. `{os}`, `{parser}` and `{device}` in `args` are
/// substituted per document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            program: "genie-parse".to_string(),
            args: ["--os", "{os}", "--parser", "{parser}", "--device", "{device}"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CsvSettings {
    pub delimiter: char,
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self { delimiter: ';' }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FlattenSettings {
    pub all_branches: bool,
}

impl CsvSettings {
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(ConfigError::InvalidSetting {
                field: "csv.delimiter".to_string(),
                reason: format!("'{}' is not a single ASCII character", self.delimiter),
            })
        }
    }
}

/// Load settings from `path`, or the defaults when no path is given.
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::FileError(format!("failed to open file {}: {}", path, e)))?;

    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parse_error = |message: String| ConfigError::ParseError {
        path: path.to_string(),
        message,
    };

    let settings: Settings = match ext.as_str() {
        "toml" => toml::from_str(&text).map_err(|e| parse_error(e.to_string()))?,
        "yaml" | "yml" => serde_yaml::from_str(&text).map_err(|e| parse_error(e.to_string()))?,
        "json" => serde_json::from_str(&text).map_err(|e| parse_error(e.to_string()))?,
        _ => return Err(ConfigError::UnsupportedFormat(ext)),
    };

    settings.csv.delimiter_byte()?;
    if settings.engine.program.trim().is_empty() {
        return Err(ConfigError::InvalidSetting {
            field: "engine.program".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(settings)
}
