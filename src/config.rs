use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::engine::StaticFieldMode;

pub const CONFIG_FILE_NAME: &str = ".xi18ntrc.json";

/// Default replacement-expression template: a fully qualified
/// ResourceBundle lookup parameterized by bundle name and key.
pub const DEFAULT_TEMPLATE: &str = "java.util.ResourceBundle.getBundle(\"${propertyBundleName}\", java.util.Locale.CHINA).getString(\"${value}\")";

/// Suffix appended to the project directory name when no bundle name is
/// configured.
pub const BUNDLE_NAME_SUFFIX: &str = "_xi18nt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StaticFieldSetting {
    #[default]
    Wrap,
    Warn,
}

impl From<StaticFieldSetting> for StaticFieldMode {
    fn from(setting: StaticFieldSetting) -> Self {
        match setting {
            StaticFieldSetting::Wrap => StaticFieldMode::Wrap,
            StaticFieldSetting::Warn => StaticFieldMode::Warn,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Resource-bundle identifier shared across the run. When absent it
    /// is derived from the project directory name plus `_xi18nt`.
    #[serde(default)]
    pub bundle_name: Option<String>,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_resources_root")]
    pub resources_root: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_encoding")]
    pub encoding: String,
    #[serde(default)]
    pub static_fields: StaticFieldSetting,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_includes() -> Vec<String> {
    vec!["src/main/java".to_string()]
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_resources_root() -> String {
    "src/main/resources".to_string()
}

fn default_region() -> String {
    "zh_CN".to_string()
}

fn default_encoding() -> String {
    "UTF-8".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bundle_name: None,
            template: default_template(),
            includes: default_includes(),
            ignores: Vec::new(),
            source_root: default_source_root(),
            resources_root: default_resources_root(),
            region: default_region(),
            encoding: default_encoding(),
            static_fields: StaticFieldSetting::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns and any declared encoding other
    /// than UTF-8 (an unsupported encoding aborts the run up front).
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Include patterns without wildcards are literal directory
        // paths and need no validation.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        let normalized = self.encoding.replace('-', "");
        if !normalized.eq_ignore_ascii_case("utf8") {
            bail!("Unsupported encoding: \"{}\" (only UTF-8)", self.encoding);
        }

        Ok(())
    }

    /// Bundle name for a run rooted at `project_dir`: configured value
    /// or the directory name plus `_xi18nt`.
    pub fn resolve_bundle_name(&self, project_dir: &Path) -> String {
        if let Some(name) = &self.bundle_name {
            return name.clone();
        }
        let project = project_dir
            .canonicalize()
            .unwrap_or_else(|_| project_dir.to_path_buf())
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string());
        format!("{}{}", project, BUNDLE_NAME_SUFFIX)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
