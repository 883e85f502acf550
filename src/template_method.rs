//! Template Method
//!
//! `Game` supplies the steps, `Play` owns their order. `Play` is implemented
//! for every `Game` through a blanket impl, so no game can reorder or skip
//! a step.

use std::io::Write;

use crate::Result;

pub trait Game {
    fn initialize(&self, out: &mut dyn Write) -> Result<()>;

    fn start_play(&self, out: &mut dyn Write) -> Result<()>;

    fn end_play(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait Play {
    fn play(&self, out: &mut dyn Write) -> Result<()>;
}

impl<G: Game + ?Sized> Play for G {
    fn play(&self, out: &mut dyn Write) -> Result<()> {
        self.initialize(out)?;
        self.start_play(out)?;
        self.end_play(out)
    }
}

pub struct Football;

impl Game for Football {
    fn initialize(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Football game initialized")?;
        Ok(())
    }

    fn start_play(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Football game started")?;
        Ok(())
    }

    fn end_play(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Football game finished")?;
        Ok(())
    }
}

pub struct Cricket;

impl Game for Cricket {
    fn initialize(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Cricket game initialized")?;
        Ok(())
    }

    fn start_play(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Cricket game started")?;
        Ok(())
    }

    fn end_play(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Cricket game finished")?;
        Ok(())
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    Football.play(out)
}
