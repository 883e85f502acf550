//! Pattern 9: Template Method
//!
//! Run with: cargo run --example p09_template_method

use std::io;

use behavioral_patterns::demo;

fn main() -> behavioral_patterns::Result<()> {
    demo::run_section("template-method", &mut io::stdout().lock())
}
