//! State
//!
//! The context delegates its behaviour to whichever state it currently
//! holds. There is no transition table: any state can follow any other, and
//! switching runs the new state's behaviour immediately.

use std::io::Write;

use tracing::debug;

use crate::{PatternError, Result};

pub trait State {
    fn name(&self) -> &'static str;

    fn handle(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct StartState;

impl State for StartState {
    fn name(&self) -> &'static str {
        "start"
    }

    fn handle(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Player is in start state")?;
        Ok(())
    }
}

pub struct StopState;

impl State for StopState {
    fn name(&self) -> &'static str {
        "stop"
    }

    fn handle(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Player is in stop state")?;
        Ok(())
    }
}

/// Starts empty; `request` fails until the first `set_state`.
#[derive(Default)]
pub struct Context {
    state: Option<Box<dyn State>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&'static str> {
        self.state.as_ref().map(|state| state.name())
    }

    pub fn set_state(&mut self, state: impl State + 'static, out: &mut dyn Write) -> Result<()> {
        debug!(from = ?self.current(), to = state.name(), "state change");
        let state = self.state.insert(Box::new(state));
        state.handle(out)
    }

    /// Run the current state's behaviour again.
    pub fn request(&self, out: &mut dyn Write) -> Result<()> {
        self.state
            .as_deref()
            .ok_or_else(|| PatternError::not_initialized("state context"))?
            .handle(out)
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let mut context = Context::new();
    context.set_state(StartState, out)?;
    context.set_state(StopState, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_state_runs_behaviour() {
        let mut context = Context::new();
        let mut out = Vec::new();

        context.set_state(StartState, &mut out).unwrap();
        assert_eq!(context.current(), Some("start"));
        context.set_state(StopState, &mut out).unwrap();
        assert_eq!(context.current(), Some("stop"));

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Player is in start state\nPlayer is in stop state\n"
        );
    }

    #[test]
    fn test_any_state_can_follow_any_state() {
        let mut context = Context::new();
        let mut out = Vec::new();
        context.set_state(StopState, &mut out).unwrap();
        context.set_state(StopState, &mut out).unwrap();
        context.request(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_request_before_any_state() {
        let context = Context::new();
        assert_eq!(context.current(), None);
        let err = context.request(&mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "state context has not been initialized");
    }
}
