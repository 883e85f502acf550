//! Pattern 4: Mediator
//!
//! Run with: cargo run --example p04_mediator

use std::io;

use behavioral_patterns::demo;

fn main() -> behavioral_patterns::Result<()> {
    demo::run_section("mediator", &mut io::stdout().lock())
}
