//! The catalog: every pattern demo in a fixed order, each behind a header.

use std::io::Write;

use tracing::debug;

use crate::{
    chain, command, iterator, mediator, memento, observer, state, strategy, template_method,
    visitor, PatternError, Result,
};

pub type Runner = fn(&mut dyn Write) -> Result<()>;

pub struct Section {
    pub slug: &'static str,
    pub title: &'static str,
    pub run: Runner,
}

pub const SECTIONS: [Section; 10] = [
    Section { slug: "chain", title: "Chain of Responsibility", run: chain::demo },
    Section { slug: "command", title: "Command", run: command::demo },
    Section { slug: "iterator", title: "Iterator", run: iterator::demo },
    Section { slug: "mediator", title: "Mediator", run: mediator::demo },
    Section { slug: "memento", title: "Memento", run: memento::demo },
    Section { slug: "observer", title: "Observer", run: observer::demo },
    Section { slug: "state", title: "State", run: state::demo },
    Section { slug: "strategy", title: "Strategy", run: strategy::demo },
    Section { slug: "template-method", title: "Template Method", run: template_method::demo },
    Section { slug: "visitor", title: "Visitor", run: visitor::demo },
];

impl Section {
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        debug!(section = self.slug, "running demo");
        writeln!(out, "=== {} ===", self.title)?;
        (self.run)(out)
    }
}

pub fn run_all(out: &mut dyn Write) -> Result<()> {
    for section in &SECTIONS {
        section.run(out)?;
    }
    Ok(())
}

pub fn run_section(slug: &str, out: &mut dyn Write) -> Result<()> {
    SECTIONS
        .iter()
        .find(|section| section.slug == slug)
        .ok_or_else(|| PatternError::UnknownSection(slug.to_string()))?
        .run(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "\
=== Chain of Responsibility ===
AuthHandler: authentication request handled
LogHandler: logging request handled
=== Command ===
Light is on
=== Iterator ===
Name: Robert
Name: John
Name: Julie
Name: Lora
=== Mediator ===
User1 sends: Привіт!
User2 receives: Привіт!
=== Memento ===
State saved: A
Current state: B
Restored state: A
=== Observer ===
Reader1 received news: Breaking news!
Reader2 received news: Breaking news!
=== State ===
Player is in start state
Player is in stop state
=== Strategy ===
Running the fast strategy
Running the slow strategy
=== Template Method ===
Football game initialized
Football game started
Football game finished
=== Visitor ===
Book price: 100
Pen price: 10
";

    #[test]
    fn test_full_catalog_output() {
        let mut out = Vec::new();
        run_all(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    }

    #[test]
    fn test_single_section() {
        let mut out = Vec::new();
        run_section("memento", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== Memento ===\nState saved: A\nCurrent state: B\nRestored state: A\n"
        );
    }

    #[test]
    fn test_unknown_section() {
        let err = run_section("singleton", &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "unknown demo section 'singleton'");
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
