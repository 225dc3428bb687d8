//! Steps, sequences and the builder that assembles them.

use std::time::Duration;

use crate::device::{Device, StatusRecord};
use crate::error::{BuildError, Result};

/// One element of a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Block the flow of control (before time scaling).
    Pause(Duration),
    /// Print a human-readable progress line.
    Announce(String),
    /// Print a structured status line.
    Record(StatusRecord),
}

impl Step {
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Pause(_) => "pause",
            Step::Announce(_) => "announce",
            Step::Record(_) => "record",
        }
    }
}

/// Ordered, non-empty list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    steps: Vec<Step>,
}

impl Sequence {
    pub fn builder() -> SequenceBuilder {
        SequenceBuilder::default()
    }

    /// The canned hardware check: warm-up, four announced checks, five records.
    ///
    /// Built from `rigdemo_config::default_steps`, the same steps a run without
    /// a config file prints.
    pub fn demo() -> Result<Self> {
        Sequence::try_from(rigdemo_config::default_steps().as_slice())
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all pauses, unscaled.
    pub fn total_pause(&self) -> Duration {
        self.steps
            .iter()
            .filter_map(|s| match s {
                Step::Pause(d) => Some(*d),
                _ => None,
            })
            .fold(Duration::ZERO, Duration::saturating_add)
    }

    pub fn records(&self) -> impl Iterator<Item = &StatusRecord> + '_ {
        self.steps.iter().filter_map(|s| match s {
            Step::Record(r) => Some(r),
            _ => None,
        })
    }

    /// Each step paired with its unscaled start offset.
    pub fn schedule(&self) -> Schedule<'_> {
        Schedule {
            steps: self.steps.iter(),
            offset: Duration::ZERO,
        }
    }
}

/// Iterator returned by [`Sequence::schedule`].
#[derive(Debug, Clone)]
pub struct Schedule<'a> {
    steps: std::slice::Iter<'a, Step>,
    offset: Duration,
}

impl<'a> Iterator for Schedule<'a> {
    type Item = (Duration, &'a Step);

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.steps.next()?;
        let at = self.offset;
        if let Step::Pause(d) = step {
            self.offset = self.offset.saturating_add(*d);
        }
        Some((at, step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

#[derive(Debug, Default, Clone)]
pub struct SequenceBuilder {
    steps: Vec<Step>,
}

impl SequenceBuilder {
    pub fn pause(mut self, d: Duration) -> Self {
        self.steps.push(Step::Pause(d));
        self
    }

    pub fn pause_ms(self, ms: u64) -> Self {
        self.pause(Duration::from_millis(ms))
    }

    pub fn announce(mut self, text: impl Into<String>) -> Self {
        self.steps.push(Step::Announce(text.into()));
        self
    }

    pub fn record(mut self, device: Device, status: bool) -> Self {
        self.steps.push(Step::Record(StatusRecord::new(device, status)));
        self
    }

    pub fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn build(self) -> std::result::Result<Sequence, BuildError> {
        if self.steps.is_empty() {
            return Err(BuildError::Empty);
        }
        for step in &self.steps {
            if let Step::Announce(text) = step
                && (text.trim().is_empty() || text.contains(['\n', '\r']))
            {
                return Err(BuildError::InvalidAnnouncement(text.clone()));
            }
        }
        Ok(Sequence { steps: self.steps })
    }
}
