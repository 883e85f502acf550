//! Pattern 8: Strategy
//!
//! Run with: cargo run --example p08_strategy

use std::io::{self, Write};

use behavioral_patterns::demo;
use behavioral_patterns::strategy::{SlowStrategy, StrategyContext};

fn main() -> behavioral_patterns::Result<()> {
    let mut out = io::stdout().lock();
    demo::run_section("strategy", &mut out)?;

    writeln!(out, "\n=== Uninitialized Context ===")?;
    match StrategyContext::new().run(&mut out) {
        Ok(()) => writeln!(out, "Unexpected success"),
        Err(e) => writeln!(out, "Error: {}", e),
    }?;

    writeln!(out, "\n=== Strategy Chosen At Construction ===")?;
    StrategyContext::with_strategy(SlowStrategy).run(&mut out)?;
    Ok(())
}
