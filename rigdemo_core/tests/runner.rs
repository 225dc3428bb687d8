use std::io::{self, Write};
use std::time::Duration;

use rigdemo_core::{DemoError, Device, JsonStyle, Runner, Sequence};
use rigdemo_traits::ManualClock;

const DEMO_STDOUT: &str = "\
This is demo2 result
Demo2 check first thing...
{\"device\": \"Power\", \"status\": true}
Demo2 check second thing...
{\"device\": \"Chiller\", \"status\": true}
Demo2 check third thing...
{\"device\": \"Relay\", \"status\": true}
Demo2 check last thing...
{\"device\": \"DUT\", \"status\": false}
{\"device\": \"Chamber\", \"status\": false}
";

/// Sink that counts flushes and remembers how many bytes were written at each one.
#[derive(Default)]
struct FlushCounter {
    buf: Vec<u8>,
    flushed_at: Vec<usize>,
}

impl Write for FlushCounter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        self.flushed_at.push(self.buf.len());
        Ok(())
    }
}

/// Sink that accepts `ok_lines` newline-terminated lines, then fails like a closed pipe.
struct ClosedAfter {
    ok_lines: usize,
    seen: usize,
}

impl Write for ClosedAfter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.seen >= self.ok_lines {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        self.seen += data.iter().filter(|b| **b == b'\n').count();
        Ok(data.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn demo_output_is_byte_exact() {
    let clock = ManualClock::new();
    let mut runner = Runner::new(clock.clone(), Vec::new());
    let summary = runner.run(&Sequence::demo().unwrap()).unwrap();

    let out = String::from_utf8(runner.into_inner()).unwrap();
    assert_eq!(out, DEMO_STDOUT);
    assert_eq!(summary.announcements, 5);
    assert_eq!(summary.records, 5);
}

#[test]
fn demo_sleeps_twelve_seconds_in_fixed_steps() {
    let clock = ManualClock::new();
    let mut runner = Runner::new(clock.clone(), io::sink());
    let summary = runner.run(&Sequence::demo().unwrap()).unwrap();

    let mut expected = vec![Duration::from_secs(3)];
    expected.extend(std::iter::repeat_n(Duration::from_secs(1), 9));
    assert_eq!(clock.sleeps(), expected);
    assert_eq!(summary.slept, Duration::from_secs(12));
    assert_eq!(summary.elapsed, Duration::from_secs(12));
}

#[test]
fn zero_scale_never_sleeps() {
    let clock = ManualClock::new();
    let mut runner = Runner::new(clock.clone(), Vec::new()).with_time_scale(0.0);
    let summary = runner.run(&Sequence::demo().unwrap()).unwrap();

    assert!(clock.sleeps().is_empty());
    assert_eq!(summary.slept, Duration::ZERO);
    assert_eq!(String::from_utf8(runner.into_inner()).unwrap(), DEMO_STDOUT);
}

#[test]
fn half_scale_halves_every_pause() {
    let clock = ManualClock::new();
    let mut runner = Runner::new(clock.clone(), io::sink()).with_time_scale(0.5);
    runner.run(&Sequence::demo().unwrap()).unwrap();

    assert_eq!(clock.sleeps()[0], Duration::from_millis(1500));
    assert_eq!(clock.total_slept(), Duration::from_secs(6));
}

#[test]
fn flushes_after_every_line() {
    let mut runner = Runner::new(ManualClock::new(), FlushCounter::default());
    runner.run(&Sequence::demo().unwrap()).unwrap();
    let sink = runner.into_inner();

    assert_eq!(sink.flushed_at.len(), 10);
    // each flush happens right after a newline
    for at in &sink.flushed_at {
        assert_eq!(sink.buf[at - 1], b'\n');
    }
    assert_eq!(*sink.flushed_at.last().unwrap(), sink.buf.len());
}

#[test]
fn records_are_printed_only_after_their_pause() {
    let clock = ManualClock::new();
    let seq = Sequence::builder()
        .pause_ms(200)
        .record(Device::Power, true)
        .build()
        .unwrap();
    let mut runner = Runner::new(clock.clone(), Vec::new());
    runner.run(&seq).unwrap();
    assert_eq!(clock.sleeps(), vec![Duration::from_millis(200)]);
    assert_eq!(
        String::from_utf8(runner.into_inner()).unwrap(),
        "{\"device\": \"Power\", \"status\": true}\n"
    );
}

#[test]
fn compact_style_changes_only_record_lines() {
    let mut runner = Runner::new(ManualClock::new(), Vec::new()).with_style(JsonStyle::Compact);
    runner.run(&Sequence::demo().unwrap()).unwrap();
    let out = String::from_utf8(runner.into_inner()).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "This is demo2 result");
    assert_eq!(lines[2], r#"{"device":"Power","status":true}"#);
    assert_eq!(lines[9], r#"{"device":"Chamber","status":false}"#);
}

#[test]
fn closed_output_surfaces_as_output_error() {
    let clock = ManualClock::new();
    let sink = ClosedAfter {
        ok_lines: 2,
        seen: 0,
    };
    let mut runner = Runner::new(clock.clone(), sink);
    let err = runner.run(&Sequence::demo().unwrap()).unwrap_err();
    match err.downcast_ref::<DemoError>() {
        Some(DemoError::Output(msg)) => assert!(msg.contains("pipe closed")),
        other => panic!("unexpected error: {other:?}"),
    }
    // stopped at the third line: warm-up plus the two pauses before it
    assert_eq!(clock.total_slept(), Duration::from_secs(5));
}

#[test]
fn negative_scale_is_rejected_before_any_output() {
    let mut runner = Runner::new(ManualClock::new(), Vec::new()).with_time_scale(-1.0);
    let err = runner.run(&Sequence::demo().unwrap()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DemoError>(),
        Some(DemoError::Config(_))
    ));
    assert!(runner.into_inner().is_empty());
}
