use clap::Parser;
use eyre::Result;
use std::io::Write;

use rigdemo_config::Config;
use rigdemo_core::{DemoError, JsonStyle, Sequence};

mod cli;
mod error_fmt;
mod logging;
mod plan;

use cli::{Cli, Commands, JSON_MODE};
use error_fmt::{exit_code_for_error, format_error_json, humanize};

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    if let Err(e) = real_main(&cli) {
        if JSON_MODE.get().copied().unwrap_or(false) {
            eprintln!("{}", format_error_json(&e));
        } else {
            eprintln!("{}", humanize(&e));
        }
        std::process::exit(exit_code_for_error(&e));
    }
}

fn real_main(cli: &Cli) -> Result<()> {
    let cfg = match &cli.config {
        Some(path) => {
            rigdemo_config::load_path(path).map_err(|e| DemoError::Config(format!("{e:#}")))?
        }
        None => Config::default(),
    };

    let level = cli
        .log_level
        .as_deref()
        .or(cfg.logging.level.as_deref())
        .unwrap_or(logging::DEFAULT_LEVEL);
    // Dropped at the end of this function so the file writer drains first.
    let _log_guard = logging::init_tracing(level, cli.json, &cfg.logging)?;

    // Failures are reported once, by main; no log event here.
    execute(cli, &cfg)
}

fn execute(cli: &Cli, cfg: &Config) -> Result<()> {
    let scale = cli.time_scale.unwrap_or(cfg.timing.scale);
    if !scale.is_finite() || scale < 0.0 {
        return Err(DemoError::Config(format!(
            "--time-scale must be a finite number >= 0 (got {scale})"
        ))
        .into());
    }
    if scale > rigdemo_config::MAX_TIME_SCALE {
        return Err(DemoError::Config(format!(
            "--time-scale is unreasonably large (got {scale}, max {})",
            rigdemo_config::MAX_TIME_SCALE
        ))
        .into());
    }
    let style = if cli.compact {
        JsonStyle::Compact
    } else {
        cfg.output.style.into()
    };
    let seq = Sequence::try_from(cfg)?;
    tracing::debug!(
        config = ?cli.config,
        steps = seq.len(),
        scale,
        ?style,
        "configuration loaded"
    );

    match cli.cmd.unwrap_or(Commands::Run) {
        Commands::Run => {
            let summary = rigdemo_core::run_on_stdout(&seq, scale, style)?;
            tracing::info!(
                records = summary.records,
                slept_ms = summary.slept.as_millis() as u64,
                "run finished"
            );
        }
        Commands::Plan => {
            let lines = plan::render_plan(&seq, scale, style)?;
            write_lines(lines.iter().map(String::as_str))?;
        }
        Commands::Health => {
            write_lines(["ok"])?;
        }
    }
    Ok(())
}

/// Print to stdout, reporting a closed pipe as an output error instead of panicking.
fn write_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{line}").map_err(DemoError::from)?;
    }
    out.flush().map_err(DemoError::from)?;
    Ok(())
}
