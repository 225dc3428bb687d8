pub mod clock;

pub use clock::{Clock, MonotonicClock};

#[cfg(any(test, feature = "test-clock"))]
pub use clock::manual::ManualClock;
