//! # Station Configuration
//!
//! Configuration for the verification station.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Explicit path (highest priority)                                   │
//! │     packcheck run scenario.toml --config ./station.toml                │
//! │                                                                         │
//! │  2. TOML Config File in the platform config dir                        │
//! │     ~/.config/packcheck/packcheck.toml (Linux)                         │
//! │     ~/Library/Application Support/com.packcheck.station/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Bounds (50,50)-(700,650), range 80, sweep step 25                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # packcheck.toml
//! [package]
//! x1 = 50.0
//! y1 = 50.0
//! x2 = 700.0
//! y2 = 650.0
//!
//! [scanner]
//! range = 80.0
//! sweep_step = 25.0
//!
//! [report]
//! output_dir = "./reports"
//! order_id_prefix = "Custom_Order"
//!
//! [[catalog.extra]]
//! name = "Smart Watch"
//! base_prefix = "RFID_SW_K3L9"
//! ```

use std::path::{Path, PathBuf};

use packcheck_core::sweep::DEFAULT_SWEEP_STEP;
use packcheck_core::validation::{validate_bounds, validate_positive};
use packcheck_core::{
    Catalog, PackageBounds, ProductEntry, SessionSettings, DEFAULT_ORDER_ID_PREFIX,
    DEFAULT_SCANNER_RANGE,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{StationError, StationResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "packcheck.toml";

// =============================================================================
// Sections
// =============================================================================

/// Package boundary on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageConfig {
    #[serde(default = "default_x1")]
    pub x1: f64,
    #[serde(default = "default_y1")]
    pub y1: f64,
    #[serde(default = "default_x2")]
    pub x2: f64,
    #[serde(default = "default_y2")]
    pub y2: f64,
}

fn default_x1() -> f64 {
    PackageBounds::default().x1
}

fn default_y1() -> f64 {
    PackageBounds::default().y1
}

fn default_x2() -> f64 {
    PackageBounds::default().x2
}

fn default_y2() -> f64 {
    PackageBounds::default().y2
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            x1: default_x1(),
            y1: default_y1(),
            x2: default_x2(),
            y2: default_y2(),
        }
    }
}

impl PackageConfig {
    pub fn bounds(&self) -> PackageBounds {
        PackageBounds::new(self.x1, self.y1, self.x2, self.y2)
    }
}

/// Scanner behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Read range in canvas units. Also the fallback for bad range text.
    #[serde(default = "default_range")]
    pub range: f64,

    /// Horizontal distance between auto-sweep points.
    #[serde(default = "default_sweep_step")]
    pub sweep_step: f64,
}

fn default_range() -> f64 {
    DEFAULT_SCANNER_RANGE
}

fn default_sweep_step() -> f64 {
    DEFAULT_SWEEP_STEP
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            range: default_range(),
            sweep_step: default_sweep_step(),
        }
    }
}

/// Where and how reports are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory used when no explicit report path is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Prefix of generated order IDs.
    #[serde(default = "default_order_id_prefix")]
    pub order_id_prefix: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_order_id_prefix() -> String {
    DEFAULT_ORDER_ID_PREFIX.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            output_dir: default_output_dir(),
            order_id_prefix: default_order_id_prefix(),
        }
    }
}

/// Products added on top of the standard catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub extra: Vec<ExtraProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraProduct {
    pub name: String,
    pub base_prefix: String,
}

// =============================================================================
// Station Config
// =============================================================================

/// Complete station configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl StationConfig {
    /// Loads configuration from file and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else packcheck.toml in the config dir)
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(config_path: Option<&Path>) -> StationResult<Self> {
        let mut config = Self::default();

        match config_path {
            Some(path) => {
                info!(path = %path.display(), "Loading station config from file");
                config = Self::read(path)?;
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(path = %path.display(), "Loading station config from file");
                    config = Self::read(&path)?;
                }
                Some(path) => {
                    debug!(path = %path.display(), "Config file not found, using defaults");
                }
                None => debug!("No config directory available, using defaults"),
            },
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults on any error.
    pub fn load_or_default(config_path: Option<&Path>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load station config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn read(path: &Path) -> StationResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| StationError::ConfigLoadFailed(format!("{}: {}", path.display(), e)))?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<&Path>) -> StationResult<PathBuf> {
        let path = config_path
            .map(Path::to_path_buf)
            .or_else(Self::default_config_path)
            .ok_or_else(|| StationError::InvalidConfig("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StationError::file_write(parent, e))?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| StationError::Serialization(e.to_string()))?;
        std::fs::write(&path, contents).map_err(|e| StationError::file_write(&path, e))?;

        info!(path = %path.display(), "Station config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StationResult<()> {
        validate_bounds(&self.package.bounds())
            .map_err(|e| StationError::InvalidConfig(e.to_string()))?;
        validate_positive("scanner.range", self.scanner.range)
            .map_err(|e| StationError::InvalidConfig(e.to_string()))?;
        validate_positive("scanner.sweep_step", self.scanner.sweep_step)
            .map_err(|e| StationError::InvalidConfig(e.to_string()))?;

        if self.report.order_id_prefix.trim().is_empty() {
            return Err(StationError::InvalidConfig(
                "report.order_id_prefix must not be empty".into(),
            ));
        }

        self.build_catalog()
            .map_err(|e| StationError::InvalidConfig(e.to_string()))?;
        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "packcheck", "station")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Standard catalog plus the configured extras.
    pub fn build_catalog(&self) -> packcheck_core::CoreResult<Catalog> {
        let extra = self
            .catalog
            .extra
            .iter()
            .map(|p| ProductEntry::new(p.name.as_str(), p.base_prefix.as_str()))
            .collect();
        Catalog::standard_with(extra)
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            bounds: self.package.bounds(),
            scanner_range: self.scanner.range,
            order_id_prefix: self.report.order_id_prefix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("packcheck-config-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_default_config() {
        let config = StationConfig::default();
        assert_eq!(config.package.bounds(), PackageBounds::default());
        assert_eq!(config.scanner.range, 80.0);
        assert_eq!(config.scanner.sweep_step, 25.0);
        assert_eq!(config.report.order_id_prefix, "Custom_Order");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: StationConfig = toml::from_str(
            r#"
            [scanner]
            range = 120.0

            [[catalog.extra]]
            name = "Smart Watch"
            base_prefix = "RFID_SW_K3L9"
            "#,
        )
        .unwrap();

        assert_eq!(config.scanner.range, 120.0);
        assert_eq!(config.scanner.sweep_step, 25.0);
        assert_eq!(config.package, PackageConfig::default());

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.base_prefix("Smart Watch").unwrap(), "RFID_SW_K3L9");
    }

    #[test]
    fn test_config_validation() {
        let mut config = StationConfig::default();

        config.scanner.range = 0.0;
        assert!(config.validate().is_err());

        config.scanner.range = 80.0;
        config.package.x2 = config.package.x1;
        assert!(config.validate().is_err());

        config.package = PackageConfig::default();
        config.catalog.extra.push(ExtraProduct {
            name: "Phone Case".into(),
            base_prefix: "RFID_DUP".into(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reused_prefix_rejected() {
        let mut config = StationConfig::default();
        config.catalog.extra.push(ExtraProduct {
            name: "Smart Watch".into(),
            base_prefix: "RFID_PC_4Y3Z".into(),
        });

        match config.validate() {
            Err(StationError::InvalidConfig(msg)) => assert!(msg.contains("RFID_PC_4Y3Z")),
            other => panic!("expected invalid config, got {:?}", other),
        }
        assert!(crate::state::Station::new(config).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_file("roundtrip.toml");
        let mut config = StationConfig::default();
        config.scanner.range = 95.0;

        config.save(Some(path.as_path())).unwrap();
        let loaded = StationConfig::load(Some(path.as_path())).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = temp_file("does-not-exist.toml");
        assert!(StationConfig::load(Some(path.as_path())).is_err());
        assert_eq!(
            StationConfig::load_or_default(Some(path.as_path())),
            StationConfig::default()
        );
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&StationConfig::default()).unwrap();
        assert!(toml_str.contains("[package]"));
        assert!(toml_str.contains("[scanner]"));
        assert!(toml_str.contains("[report]"));
    }
}
