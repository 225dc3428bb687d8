use std::time::Duration;

use proptest::prelude::*;
use rigdemo_core::{Device, Runner, Sequence, Step};
use rigdemo_traits::ManualClock;

#[derive(Debug, Clone)]
enum Op {
    Pause(u64),
    Announce(u8),
    Record(usize, bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..5_000).prop_map(Op::Pause),
        any::<u8>().prop_map(Op::Announce),
        (0usize..Device::ALL.len(), any::<bool>()).prop_map(|(i, s)| Op::Record(i, s)),
    ]
}

fn build(ops: &[Op]) -> Sequence {
    let mut b = Sequence::builder();
    for op in ops {
        b = match op {
            Op::Pause(ms) => b.pause_ms(*ms),
            Op::Announce(n) => b.announce(format!("step {n}")),
            Op::Record(i, s) => b.record(Device::ALL[*i], *s),
        };
    }
    b.build().unwrap()
}

proptest! {
    #[test]
    fn slept_time_is_scaled_total(ops in prop::collection::vec(op(), 1..40), quarter in 0u32..=8) {
        let seq = build(&ops);
        let scale = f64::from(quarter) * 0.25;
        let clock = ManualClock::new();
        let mut runner = Runner::new(clock.clone(), std::io::sink()).with_time_scale(scale);
        let summary = runner.run(&seq).unwrap();

        let nominal_ms: u64 = ops.iter().map(|o| match o { Op::Pause(ms) => *ms, _ => 0 }).sum();
        let expected = Duration::from_millis(nominal_ms).mul_f64(scale);
        let diff = summary.slept.abs_diff(expected);
        // per-pause float rounding stays well under a microsecond
        prop_assert!(diff < Duration::from_micros(1), "slept {:?} expected {:?}", summary.slept, expected);
        prop_assert_eq!(summary.slept, clock.total_slept());
        if scale == 0.0 {
            prop_assert!(clock.sleeps().is_empty());
        }
    }

    #[test]
    fn one_line_per_visible_step(ops in prop::collection::vec(op(), 1..40)) {
        let seq = build(&ops);
        let mut runner = Runner::new(ManualClock::new(), Vec::new()).with_time_scale(0.0);
        let summary = runner.run(&seq).unwrap();
        let out = String::from_utf8(runner.into_inner()).unwrap();

        let visible = seq.steps().iter().filter(|s| !matches!(s, Step::Pause(_))).count();
        prop_assert_eq!(out.lines().count(), visible);
        prop_assert_eq!(summary.announcements + summary.records, visible);
        prop_assert_eq!(summary.records, seq.records().count());
    }
}
