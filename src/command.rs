//! Command
//!
//! A command wraps exactly one call on a receiver. The invoker only knows
//! the `Command` trait, never the `Light`.

use std::cell::Cell;
use std::io::Write;

use tracing::debug;

use crate::{PatternError, Result};

/// The receiver.
#[derive(Debug, Default)]
pub struct Light {
    on: Cell<bool>,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.on.get()
    }

    pub fn turn_on(&self, out: &mut dyn Write) -> Result<()> {
        self.on.set(true);
        writeln!(out, "Light is on")?;
        Ok(())
    }

    pub fn turn_off(&self, out: &mut dyn Write) -> Result<()> {
        self.on.set(false);
        writeln!(out, "Light is off")?;
        Ok(())
    }
}

pub trait Command {
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct LightOnCommand<'a> {
    light: &'a Light,
}

impl<'a> LightOnCommand<'a> {
    pub fn new(light: &'a Light) -> Self {
        LightOnCommand { light }
    }
}

impl Command for LightOnCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.light.turn_on(out)
    }
}

pub struct LightOffCommand<'a> {
    light: &'a Light,
}

impl<'a> LightOffCommand<'a> {
    pub fn new(light: &'a Light) -> Self {
        LightOffCommand { light }
    }
}

impl Command for LightOffCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.light.turn_off(out)
    }
}

/// Invoker with a single programmable button.
#[derive(Default)]
pub struct RemoteControl<'a> {
    slot: Option<Box<dyn Command + 'a>>,
}

impl<'a> RemoteControl<'a> {
    pub fn new() -> Self {
        RemoteControl { slot: None }
    }

    pub fn set_command(&mut self, command: impl Command + 'a) {
        self.slot = Some(Box::new(command));
    }

    pub fn press_button(&self, out: &mut dyn Write) -> Result<()> {
        let command = self
            .slot
            .as_deref()
            .ok_or_else(|| PatternError::not_initialized("remote control"))?;
        debug!("remote button pressed");
        command.execute(out)
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let light = Light::new();
    let command = LightOnCommand::new(&light);
    command.execute(out)
}
