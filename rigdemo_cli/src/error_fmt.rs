//! Human-readable error descriptions and structured JSON error formatting.

use rigdemo_core::DemoError;

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    if let Some(de) = err.downcast_ref::<DemoError>() {
        return match de {
            DemoError::Config(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: A malformed TOML file, an unknown device name, or an out-of-range timing value.\nHow to fix: Edit the config file (or drop --config to use the built-in sequence), then rerun."
            ),
            DemoError::Output(msg) => format!(
                "What happened: Could not write to stdout ({msg}).\nLikely causes: The reading process exited or closed the pipe before the sequence finished.\nHow to fix: Keep the consumer attached until the last record is printed."
            ),
            DemoError::Format(msg) => format!(
                "What happened: A status record could not be serialized ({msg}).\nLikely causes: See logs.\nHow to fix: Re-run with --log-level=debug or set RUST_LOG for more detail."
            ),
        };
    }

    // Generic fallback
    let msg = format!("{err:#}");
    format!(
        "Something went wrong.\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Stable exit codes: 3 configuration, 4 output, 1 anything else.
/// (2 is left to clap for usage errors.)
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    match err.downcast_ref::<DemoError>() {
        Some(DemoError::Config(_)) => 3,
        Some(DemoError::Output(_)) => 4,
        Some(DemoError::Format(_)) | None => 1,
    }
}

pub fn reason_name(err: &eyre::Report) -> &'static str {
    match err.downcast_ref::<DemoError>() {
        Some(DemoError::Config(_)) => "Config",
        Some(DemoError::Output(_)) => "Output",
        Some(DemoError::Format(_)) => "Format",
        None => "Error",
    }
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    serde_json::json!({ "reason": reason_name(err), "message": humanize(err) }).to_string()
}
