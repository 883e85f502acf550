//! Pattern 5: Memento
//!
//! Run with: cargo run --example p05_memento

use std::io;

use behavioral_patterns::demo;

fn main() -> behavioral_patterns::Result<()> {
    demo::run_section("memento", &mut io::stdout().lock())
}
