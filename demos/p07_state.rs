//! Pattern 7: State
//!
//! Run with: cargo run --example p07_state

use std::io::{self, Write};

use behavioral_patterns::demo;
use behavioral_patterns::state::{Context, StartState};

fn main() -> behavioral_patterns::Result<()> {
    let mut out = io::stdout().lock();
    demo::run_section("state", &mut out)?;

    writeln!(out, "\n=== Before Any State ===")?;
    let mut context = Context::new();
    match context.request(&mut out) {
        Ok(()) => writeln!(out, "Unexpected success"),
        Err(e) => writeln!(out, "Error: {}", e),
    }?;

    context.set_state(StartState, &mut out)?;
    context.request(&mut out)?;
    writeln!(out, "Current state: {:?}", context.current())?;
    Ok(())
}
