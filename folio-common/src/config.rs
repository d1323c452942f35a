//! Configuration loading and content/output folder resolution

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable naming the content (source table) directory
pub const CONTENT_DIR_ENV: &str = "FOLIO_CONTENT_DIR";

/// Environment variable naming the output (document) directory
pub const OUTPUT_DIR_ENV: &str = "FOLIO_OUTPUT_DIR";

/// Compiled default for the content directory
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// Compiled default for the output directory
pub const DEFAULT_OUTPUT_DIR: &str = "public/data";

/// Optional TOML config file schema (`~/.config/folio/<module>.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging section of the TOML config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Resolved directories for one build invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPaths {
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Resolves content/output directories following priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. Compiled default (fallback)
///
/// A missing or unreadable config file never terminates resolution;
/// it just drops that tier.
pub struct PathResolver {
    module_name: String,
}

impl PathResolver {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
        }
    }

    /// Resolve both directories from CLI arguments (if given)
    pub fn resolve(
        &self,
        cli_content_dir: Option<&str>,
        cli_output_dir: Option<&str>,
    ) -> ContentPaths {
        let toml_config = self.load_toml_config();
        self.resolve_from(&toml_config, cli_content_dir, cli_output_dir)
    }

    /// Resolve both directories against an already-loaded TOML config.
    ///
    /// Callers that also need other config fields (the logging level)
    /// load the file once and pass it here instead of re-reading it.
    pub fn resolve_from(
        &self,
        toml_config: &TomlConfig,
        cli_content_dir: Option<&str>,
        cli_output_dir: Option<&str>,
    ) -> ContentPaths {
        let content_dir = resolve_dir(
            cli_content_dir,
            CONTENT_DIR_ENV,
            toml_config.content_dir.as_deref(),
            DEFAULT_CONTENT_DIR,
        );
        let output_dir = resolve_dir(
            cli_output_dir,
            OUTPUT_DIR_ENV,
            toml_config.output_dir.as_deref(),
            DEFAULT_OUTPUT_DIR,
        );

        ContentPaths {
            content_dir,
            output_dir,
        }
    }

    /// Load the module's TOML config, degrading to defaults on any failure
    pub fn load_toml_config(&self) -> TomlConfig {
        let Some(path) = self.config_file_path() else {
            return TomlConfig::default();
        };
        if !path.exists() {
            return TomlConfig::default();
        }
        match std::fs::read_to_string(&path) {
            Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring invalid config file {}: {}", path.display(), e);
                    TomlConfig::default()
                }
            },
            Err(e) => {
                warn!("Could not read config file {}: {}", path.display(), e);
                TomlConfig::default()
            }
        }
    }

    /// Platform config file location: `<config-dir>/folio/<module>.toml`
    fn config_file_path(&self) -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join(format!("{}.toml", self.module_name)))
    }
}

fn resolve_dir(
    cli_arg: Option<&str>,
    env_var_name: &str,
    toml_value: Option<&Path>,
    default: &str,
) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = toml_value {
        return path.to_path_buf();
    }

    // Priority 4: Compiled default
    PathBuf::from(default)
}

/// Create the output directory (and parents) if absent. Idempotent.
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}
