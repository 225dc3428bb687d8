//! Devices named in the demo and the status record printed for each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DemoError;

/// Rig component reported by a status record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Device {
    Power,
    Chiller,
    Relay,
    #[serde(rename = "DUT")]
    Dut,
    Chamber,
}

impl Device {
    pub const ALL: [Device; 5] = [
        Device::Power,
        Device::Chiller,
        Device::Relay,
        Device::Dut,
        Device::Chamber,
    ];

    /// Name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Device::Power => "Power",
            Device::Chiller => "Chiller",
            Device::Relay => "Relay",
            Device::Dut => "DUT",
            Device::Chamber => "Chamber",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Device::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DemoError::Config(format!("unknown device '{s}'")))
    }
}

/// One structured status line: `{"device": ..., "status": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub device: Device,
    pub status: bool,
}

impl StatusRecord {
    pub fn new(device: Device, status: bool) -> Self {
        Self { device, status }
    }
}
