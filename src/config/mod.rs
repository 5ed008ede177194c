//! Configuration system for Glyphtop

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub intervals: IntervalsConfig,
    pub display: DisplayConfig,
    pub cpu: CpuConfig,
    pub network: NetworkConfig,
    pub disk: DiskConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("glyphtop").join("config.toml"))
    }
}

/// Polling period per data source, in seconds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IntervalsConfig {
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
    pub network: f64,
    pub processes: f64,
    pub battery: f64,
    pub addresses: f64,
    pub clock: f64,
}

impl Default for IntervalsConfig {
    fn default() -> Self {
        Self {
            cpu: 2.0,
            memory: 2.0,
            disk: 2.0,
            network: 2.0,
            processes: 6.0,
            battery: 60.0,
            addresses: 60.0,
            clock: 1.0,
        }
    }
}

/// Convert a configured period to a `Duration`, never shorter than 100ms.
pub fn period(seconds: f64) -> Duration {
    if seconds.is_finite() && seconds > 0.1 {
        Duration::from_secs_f64(seconds)
    } else {
        Duration::from_millis(100)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThreadGraph {
    #[default]
    Braille,
    Block,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub theme: String,
    pub thread_graph: ThreadGraph,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            thread_graph: ThreadGraph::Braille,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CpuConfig {
    /// Bottom of the temperature graphs, in °C
    pub temp_low: f64,
    /// Top of the temperature graphs when the sensor reports no limit
    pub temp_high_fallback: f64,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            temp_low: 20.0,
            temp_high_fallback: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub interface: Option<String>,
    /// Top of the throughput graphs, in bytes per second
    pub throughput_max: f64,
    pub auto_raise: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            interface: None,
            throughput_max: 1.0e6,
            auto_raise: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiskConfig {
    pub throughput_max: f64,
    pub auto_raise: bool,
    pub skip_loop_devices: bool,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            throughput_max: 1.0e6,
            auto_raise: false,
            skip_loop_devices: true,
        }
    }
}
