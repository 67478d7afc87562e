//! Configuration for the demo driver and device construction.
//!
//! Builder-style structs with sensible defaults. With the `serde` feature the
//! structs derive `Serialize`/`Deserialize`; the `json` feature adds loading
//! from JSON text or files.
//!
//! # Example
//!
//! ```rust
//! use remote_bridge::config::{Config, DeviceConfig, OutputConfig, OutputTarget};
//! use remote_bridge::VolumePolicy;
//!
//! // Use defaults
//! let config = Config::default();
//! assert_eq!(config.output.target, OutputTarget::Stdout);
//!
//! // Or customize
//! let config = Config::default()
//!     .with_device(DeviceConfig::default().with_volume_policy(VolumePolicy::Percent))
//!     .with_output(OutputConfig::default().with_target(OutputTarget::Tracing));
//! ```

use crate::traits::VolumePolicy;

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Device construction settings
    pub device: DeviceConfig,
    /// Where notifications are written
    pub output: OutputConfig,
}

impl Config {
    /// Set device configuration
    pub fn with_device(mut self, device: DeviceConfig) -> Self {
        self.device = device;
        self
    }

    /// Set output configuration
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }
}

#[cfg(feature = "json")]
impl Config {
    /// Parse a configuration from JSON text.
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// ```rust
    /// use remote_bridge::config::{Config, OutputTarget};
    /// use remote_bridge::VolumePolicy;
    ///
    /// let config = Config::from_json(r#"{ "device": { "volume_policy": "percent" } }"#).unwrap();
    /// assert_eq!(config.device.volume_policy, VolumePolicy::Percent);
    /// assert_eq!(config.output.target, OutputTarget::Stdout);
    /// ```
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        serde_json::from_str(text).context("invalid configuration JSON")
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}

#[cfg(feature = "json")]
impl Config {
    /// Build a configuration from command-line arguments (program name
    /// already removed).
    ///
    /// No argument gives the defaults, one argument is a config file path,
    /// anything more is an error.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        match args.as_slice() {
            [] => Ok(Self::default()),
            [path] => Self::load(path),
            _ => anyhow::bail!(
                "expected at most one argument (config file), got {}",
                args.join(" ")
            ),
        }
    }
}

// ============================================================================
// Device Config
// ============================================================================

/// Settings applied to every device the driver builds
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    /// How devices store requested volumes
    pub volume_policy: VolumePolicy,
}

impl DeviceConfig {
    /// Set the volume policy
    pub fn with_volume_policy(mut self, policy: VolumePolicy) -> Self {
        self.volume_policy = policy;
        self
    }
}

// ============================================================================
// Output Config
// ============================================================================

/// Where device notifications are sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputTarget {
    /// One line per notification on stdout.
    #[default]
    Stdout,
    /// `tracing` events at `INFO`.
    Tracing,
    /// Discard notifications.
    Silent,
}

impl OutputTarget {
    /// Returns the target as a lowercase string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputTarget::Stdout => "stdout",
            OutputTarget::Tracing => "tracing",
            OutputTarget::Silent => "silent",
        }
    }

    /// Parse a target from text, trimmed and case-insensitive.
    ///
    /// ```
    /// use remote_bridge::config::OutputTarget;
    ///
    /// assert_eq!(OutputTarget::from_text("STDOUT"), Some(OutputTarget::Stdout));
    /// assert_eq!(OutputTarget::from_text(" log "), Some(OutputTarget::Tracing));
    /// assert_eq!(OutputTarget::from_text("none"), Some(OutputTarget::Silent));
    /// assert_eq!(OutputTarget::from_text("printer"), None);
    /// ```
    pub fn from_text(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("stdout") || s.eq_ignore_ascii_case("console") {
            Some(OutputTarget::Stdout)
        } else if s.eq_ignore_ascii_case("tracing") || s.eq_ignore_ascii_case("log") {
            Some(OutputTarget::Tracing)
        } else if s.eq_ignore_ascii_case("silent") || s.eq_ignore_ascii_case("none") {
            Some(OutputTarget::Silent)
        } else {
            None
        }
    }
}

/// Output configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutputConfig {
    /// Notification destination
    pub target: OutputTarget,
}

impl OutputConfig {
    /// Set the notification destination
    pub fn with_target(mut self, target: OutputTarget) -> Self {
        self.target = target;
        self
    }
}
