//! Pattern 3: Iterator
//!
//! Run with: cargo run --example p03_iterator

use std::io;

use behavioral_patterns::demo;

fn main() -> behavioral_patterns::Result<()> {
    demo::run_section("iterator", &mut io::stdout().lock())
}
