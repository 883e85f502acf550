//! Pattern 2: Command
//!
//! Run with: cargo run --example p02_command

use std::io::{self, Write};

use behavioral_patterns::command::{Light, LightOffCommand, LightOnCommand, RemoteControl};
use behavioral_patterns::demo;

fn main() -> behavioral_patterns::Result<()> {
    let mut out = io::stdout().lock();
    demo::run_section("command", &mut out)?;

    writeln!(out, "\n=== Remote Control ===")?;
    let light = Light::new();
    let mut remote = RemoteControl::new();

    if let Err(e) = remote.press_button(&mut out) {
        writeln!(out, "Empty slot: {}", e)?;
    }

    remote.set_command(LightOnCommand::new(&light));
    remote.press_button(&mut out)?;
    remote.set_command(LightOffCommand::new(&light));
    remote.press_button(&mut out)?;
    writeln!(out, "Light on at the end: {}", light.is_on())?;
    Ok(())
}
