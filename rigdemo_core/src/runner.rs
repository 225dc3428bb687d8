//! Sequential runner: prints each step to a sink, sleeping in place on pauses.

use std::io::Write;
use std::time::Duration;

use rigdemo_traits::Clock;

use crate::error::{DemoError, Result};
use crate::format::{JsonStyle, render_record};
use crate::sequence::{Sequence, Step};

/// Counters reported after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub announcements: usize,
    pub records: usize,
    /// Total (scaled) time requested from the clock.
    pub slept: Duration,
    /// Wall time from first to last step, as seen by the clock.
    pub elapsed: Duration,
}

/// Apply the time scale to a pause.
///
/// Scale 0 maps every pause to zero. Negative, non-finite and overflowing
/// results are rejected.
pub fn scaled_pause(d: Duration, scale: f64) -> std::result::Result<Duration, DemoError> {
    if scale == 0.0 {
        return Ok(Duration::ZERO);
    }
    Duration::try_from_secs_f64(d.as_secs_f64() * scale)
        .map_err(|e| DemoError::Config(format!("time scale {scale} not usable: {e}")))
}

/// Drives a [`Sequence`] against a clock and an output sink.
///
/// Every line is newline-terminated and followed by a flush so a reader on
/// the other end of a pipe sees it immediately.
pub struct Runner<C: Clock, W: Write> {
    clock: C,
    out: W,
    scale: f64,
    style: JsonStyle,
}

impl<C: Clock, W: Write> Runner<C, W> {
    pub fn new(clock: C, out: W) -> Self {
        Self {
            clock,
            out,
            scale: 1.0,
            style: JsonStyle::default(),
        }
    }

    pub fn with_time_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn time_scale(&self) -> f64 {
        self.scale
    }

    /// Give back the sink (tests inspect captured output).
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run(&mut self, seq: &Sequence) -> Result<RunSummary> {
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(DemoError::Config(format!(
                "time scale must be a finite number >= 0 (got {})",
                self.scale
            ))
            .into());
        }

        tracing::info!(
            steps = seq.len(),
            scale = self.scale,
            nominal_ms = seq.total_pause().as_millis() as u64,
            "sequence start"
        );
        let t0 = self.clock.now();
        let mut summary = RunSummary::default();

        for (index, step) in seq.steps().iter().enumerate() {
            match step {
                Step::Pause(d) => {
                    let d = scaled_pause(*d, self.scale)?;
                    tracing::debug!(index, ms = d.as_millis() as u64, "pause");
                    if !d.is_zero() {
                        self.clock.sleep(d);
                        summary.slept = summary.slept.saturating_add(d);
                    }
                }
                Step::Announce(text) => {
                    tracing::debug!(index, text = %text, "announce");
                    self.emit(text)?;
                    summary.announcements += 1;
                }
                Step::Record(rec) => {
                    let line = render_record(rec, self.style)?;
                    tracing::debug!(index, device = %rec.device, status = rec.status, "record");
                    self.emit(&line)?;
                    summary.records += 1;
                }
            }
        }

        summary.elapsed = self.clock.elapsed_since(t0);
        tracing::info!(
            records = summary.records,
            announcements = summary.announcements,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "sequence complete"
        );
        Ok(summary)
    }

    fn emit(&mut self, line: &str) -> std::result::Result<(), DemoError> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}
