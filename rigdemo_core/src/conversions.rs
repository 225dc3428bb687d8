//! Bridges from `rigdemo_config` types to `rigdemo_core` types.

use eyre::WrapErr;

use crate::device::Device;
use crate::error::{DemoError, Result};
use crate::format::JsonStyle;
use crate::sequence::Sequence;

impl From<rigdemo_config::RecordStyle> for JsonStyle {
    fn from(s: rigdemo_config::RecordStyle) -> Self {
        match s {
            rigdemo_config::RecordStyle::Spaced => JsonStyle::Spaced,
            rigdemo_config::RecordStyle::Compact => JsonStyle::Compact,
        }
    }
}

impl TryFrom<&[rigdemo_config::StepCfg]> for Sequence {
    type Error = eyre::Report;

    fn try_from(steps: &[rigdemo_config::StepCfg]) -> Result<Self> {
        use rigdemo_config::StepCfg;

        let mut b = Sequence::builder();
        for (i, step) in steps.iter().enumerate() {
            b = match step {
                StepCfg::Pause { ms } => b.pause_ms(*ms),
                StepCfg::Announce { text } => b.announce(text.as_str()),
                StepCfg::Record { device, status } => {
                    let device: Device = device.parse().map_err(|_| {
                        DemoError::Config(format!("step[{i}]: unknown device '{device}'"))
                    })?;
                    b.record(device, *status)
                }
            };
        }
        let seq = b
            .build()
            .map_err(|e| DemoError::Config(e.to_string()))
            .wrap_err("failed to build sequence from configuration")?;
        Ok(seq)
    }
}

impl TryFrom<&rigdemo_config::Config> for Sequence {
    type Error = eyre::Report;

    fn try_from(cfg: &rigdemo_config::Config) -> Result<Self> {
        Sequence::try_from(cfg.steps.as_slice())
    }
}
