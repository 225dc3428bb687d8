#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Demo sequence engine (output-sink agnostic).
//!
//! ## Architecture
//!
//! - **Devices**: the closed set of rig components and their status record (`device`)
//! - **Sequence**: ordered pause/announce/record steps plus a builder (`sequence`)
//! - **Format**: byte-exact JSON rendering of records (`format`)
//! - **Runner**: executes a sequence against a `rigdemo_traits::Clock` and any
//!   `std::io::Write` sink, flushing after every line (`runner`)
//! - **Conversions**: `rigdemo_config` → core types (`conversions`)

pub mod conversions;
pub mod device;
pub mod error;
pub mod format;
pub mod runner;
pub mod sequence;

pub use device::{Device, StatusRecord};
pub use error::{BuildError, DemoError};
pub use format::{JsonStyle, render_record};
pub use runner::{RunSummary, Runner, scaled_pause};
pub use sequence::{Schedule, Sequence, SequenceBuilder, Step};

/// Run `seq` in real time on stdout.
pub fn run_on_stdout(seq: &Sequence, scale: f64, style: JsonStyle) -> error::Result<RunSummary> {
    let stdout = std::io::stdout();
    let mut runner = Runner::new(rigdemo_traits::MonotonicClock::new(), stdout.lock())
        .with_time_scale(scale)
        .with_style(style);
    runner.run(seq)
}
