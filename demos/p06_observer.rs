//! Pattern 6: Observer
//!
//! Run with: cargo run --example p06_observer

use std::io::{self, Write};

use behavioral_patterns::demo;
use behavioral_patterns::observer::{NewsAgency, NewsReader};

fn main() -> behavioral_patterns::Result<()> {
    let mut out = io::stdout().lock();
    demo::run_section("observer", &mut out)?;

    writeln!(out, "\n=== Detaching ===")?;
    let mut agency = NewsAgency::new();
    let morning = agency.attach(NewsReader::new("Morning"));
    agency.attach(NewsReader::new("Evening"));

    agency.notify("Markets open", &mut out)?;
    agency.detach(morning);
    let delivered = agency.notify("Markets close", &mut out)?;
    writeln!(out, "Second bulletin reached {} reader(s)", delivered)?;
    Ok(())
}
