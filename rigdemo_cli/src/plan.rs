//! `plan` command: the schedule as text, without sleeping.

use std::time::Duration;

use rigdemo_core::error::Result;
use rigdemo_core::{JsonStyle, Sequence, Step, render_record, scaled_pause};

fn secs(d: Duration) -> String {
    format!("{:.3}s", d.as_secs_f64())
}

/// One line per step: `+<offset> <kind> <payload>`, then a total line.
/// Offsets and pauses are shown after time scaling.
pub fn render_plan(seq: &Sequence, scale: f64, style: JsonStyle) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(seq.len() + 1);
    for (at, step) in seq.schedule() {
        let at = scaled_pause(at, scale)?;
        let payload = match step {
            Step::Pause(d) => secs(scaled_pause(*d, scale)?),
            Step::Announce(text) => text.clone(),
            Step::Record(rec) => render_record(rec, style)?,
        };
        lines.push(format!("+{} {} {}", secs(at), step.kind(), payload));
    }
    lines.push(format!("total {}", secs(scaled_pause(seq.total_pause(), scale)?)));
    Ok(lines)
}
