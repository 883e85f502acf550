//! Strategy
//!
//! The context runs whichever algorithm was selected last. Running with no
//! selection is an error rather than a silent default.

use std::io::Write;

use tracing::debug;

use crate::{PatternError, Result};

pub trait Strategy {
    fn name(&self) -> &'static str;

    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct FastStrategy;

impl Strategy for FastStrategy {
    fn name(&self) -> &'static str {
        "fast"
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Running the fast strategy")?;
        Ok(())
    }
}

pub struct SlowStrategy;

impl Strategy for SlowStrategy {
    fn name(&self) -> &'static str {
        "slow"
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Running the slow strategy")?;
        Ok(())
    }
}

#[derive(Default)]
pub struct StrategyContext {
    strategy: Option<Box<dyn Strategy>>,
}

impl StrategyContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: impl Strategy + 'static) -> Self {
        StrategyContext {
            strategy: Some(Box::new(strategy)),
        }
    }

    pub fn set_strategy(&mut self, strategy: impl Strategy + 'static) {
        debug!(strategy = strategy.name(), "strategy selected");
        self.strategy = Some(Box::new(strategy));
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        match &self.strategy {
            Some(strategy) => strategy.execute(out),
            None => Err(PatternError::not_initialized("strategy context")),
        }
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let mut context = StrategyContext::new();

    context.set_strategy(FastStrategy);
    context.run(out)?;

    context.set_strategy(SlowStrategy);
    context.run(out)?;
    Ok(())
}
