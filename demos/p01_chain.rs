//! Pattern 1: Chain of Responsibility
//!
//! Run with: cargo run --example p01_chain

use std::io;

use behavioral_patterns::demo;

fn main() -> behavioral_patterns::Result<()> {
    demo::run_section("chain", &mut io::stdout().lock())
}
