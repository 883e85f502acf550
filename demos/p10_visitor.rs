//! Pattern 10: Visitor
//!
//! Run with: cargo run --example p10_visitor

use std::io;

use behavioral_patterns::demo;

fn main() -> behavioral_patterns::Result<()> {
    demo::run_section("visitor", &mut io::stdout().lock())
}
