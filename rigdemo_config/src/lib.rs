#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the demo sequence.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - Every section is optional; an empty file yields the canned sequence.
use eyre::WrapErr;
use serde::Deserialize;
use std::path::Path;

/// Longest single pause accepted from a config file.
pub const MAX_PAUSE_MS: u64 = 10 * 60 * 1000;
/// Largest accepted `timing.scale`.
pub const MAX_TIME_SCALE: f64 = 1000.0;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Timing {
    /// Multiplier applied to every pause. 0 disables sleeping.
    pub scale: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordStyle {
    /// `{"device": "Power", "status": true}`
    #[default]
    Spaced,
    /// `{"device":"Power","status":true}`
    Compact,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Output {
    pub style: RecordStyle,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

/// One configured step. Device names are checked when the sequence is built.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StepCfg {
    Pause { ms: u64 },
    Announce { text: String },
    Record { device: String, status: bool },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub timing: Timing,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub logging: Logging,
    /// `[[step]]` tables; empty means "use the canned sequence".
    #[serde(default, rename = "step")]
    pub steps: Vec<StepCfg>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            output: Output::default(),
            logging: Logging::default(),
            steps: default_steps(),
        }
    }
}

/// The canned demo: three seconds of warm-up, then four checks.
pub fn default_steps() -> Vec<StepCfg> {
    fn pause(ms: u64) -> StepCfg {
        StepCfg::Pause { ms }
    }
    fn announce(text: &str) -> StepCfg {
        StepCfg::Announce {
            text: text.to_string(),
        }
    }
    fn record(device: &str, status: bool) -> StepCfg {
        StepCfg::Record {
            device: device.to_string(),
            status,
        }
    }

    vec![
        pause(3000),
        announce("This is demo2 result"),
        pause(1000),
        announce("Demo2 check first thing..."),
        pause(1000),
        record("Power", true),
        pause(1000),
        announce("Demo2 check second thing..."),
        pause(1000),
        record("Chiller", true),
        pause(1000),
        announce("Demo2 check third thing..."),
        pause(1000),
        record("Relay", true),
        pause(1000),
        announce("Demo2 check last thing..."),
        pause(1000),
        record("DUT", false),
        pause(1000),
        record("Chamber", false),
    ]
}

/// Parse TOML text. A file without `[[step]]` tables gets the canned steps.
pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    let mut cfg = toml::from_str::<Config>(s)?;
    if cfg.steps.is_empty() {
        cfg.steps = default_steps();
    }
    Ok(cfg)
}

/// Read, parse and validate a config file.
pub fn load_path(path: &Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
    let cfg = load_toml(&text)
        .wrap_err_with(|| format!("invalid configuration in {}", path.display()))?;
    cfg.validate()
        .wrap_err_with(|| format!("invalid configuration in {}", path.display()))?;
    Ok(cfg)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Timing
        let scale = self.timing.scale;
        if !scale.is_finite() || scale < 0.0 {
            eyre::bail!("timing.scale must be a finite number >= 0");
        }
        if scale > MAX_TIME_SCALE {
            eyre::bail!("timing.scale is unreasonably large (>{MAX_TIME_SCALE})");
        }

        // Logging
        if let Some(r) = self.logging.rotation.as_deref()
            && !matches!(r, "never" | "daily" | "hourly")
        {
            eyre::bail!("logging.rotation must be one of never|daily|hourly (got '{r}')");
        }

        // Steps
        if self.steps.is_empty() {
            eyre::bail!("step list must not be empty");
        }
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                StepCfg::Pause { ms } => {
                    if *ms > MAX_PAUSE_MS {
                        eyre::bail!("step[{i}]: pause is unreasonably long (>10min)");
                    }
                }
                StepCfg::Announce { text } => {
                    if text.trim().is_empty() {
                        eyre::bail!("step[{i}]: announce text must not be empty");
                    }
                    if text.contains(['\n', '\r']) {
                        eyre::bail!("step[{i}]: announce text must be a single line");
                    }
                }
                StepCfg::Record { device, .. } => {
                    if device.trim().is_empty() {
                        eyre::bail!("step[{i}]: record device must not be empty");
                    }
                }
            }
        }
        Ok(())
    }

    /// Sum of all configured pauses, before scaling.
    pub fn total_pause_ms(&self) -> u64 {
        self.steps
            .iter()
            .map(|s| match s {
                StepCfg::Pause { ms } => *ms,
                _ => 0,
            })
            .fold(0u64, u64::saturating_add)
    }
}
