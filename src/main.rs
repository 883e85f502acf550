use std::io::{self, Write};
use std::process;

use anyhow::Context;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use behavioral_patterns::demo;

fn run() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run_all(&mut out).context("demo run failed")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        process::exit(1);
    }
}
