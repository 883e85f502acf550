//! Chain of Responsibility
//!
//! A request walks a singly linked list of handlers. The first handler whose
//! predicate matches consumes it; if nobody matches the request is dropped
//! without output.

use std::io::Write;

use tracing::{debug, trace};

use crate::Result;

/// One link's behaviour: decide whether a request is ours and react to it.
pub trait Handler {
    fn name(&self) -> &'static str;

    fn can_handle(&self, request: &str) -> bool;

    fn process(&self, request: &str, out: &mut dyn Write) -> Result<()>;
}

pub struct AuthHandler;

impl Handler for AuthHandler {
    fn name(&self) -> &'static str {
        "AuthHandler"
    }

    fn can_handle(&self, request: &str) -> bool {
        request == "auth"
    }

    fn process(&self, _request: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "AuthHandler: authentication request handled")?;
        Ok(())
    }
}

pub struct LogHandler;

impl Handler for LogHandler {
    fn name(&self) -> &'static str {
        "LogHandler"
    }

    fn can_handle(&self, request: &str) -> bool {
        request == "log"
    }

    fn process(&self, _request: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "LogHandler: logging request handled")?;
        Ok(())
    }
}

/// What happened to a request after it went through the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled { by: &'static str },
    Dropped,
}

/// A node of the chain. Each node owns its successor, so the chain is
/// acyclic by construction.
pub struct HandlerChain {
    handler: Box<dyn Handler>,
    next: Option<Box<HandlerChain>>,
}

impl HandlerChain {
    pub fn new(handler: impl Handler + 'static) -> Self {
        HandlerChain {
            handler: Box::new(handler),
            next: None,
        }
    }

    /// Append `handler` at the tail of the chain.
    pub fn then(mut self, handler: impl Handler + 'static) -> Self {
        self.append(HandlerChain::new(handler));
        self
    }

    fn append(&mut self, node: HandlerChain) {
        match &mut self.next {
            Some(next) => next.append(node),
            None => self.next = Some(Box::new(node)),
        }
    }

    pub fn len(&self) -> usize {
        let mut count = 1;
        let mut node = self.next.as_deref();
        while let Some(n) = node {
            count += 1;
            node = n.next.as_deref();
        }
        count
    }

    pub fn handle(&self, request: &str, out: &mut dyn Write) -> Result<Outcome> {
        let mut node = Some(self);
        while let Some(current) = node {
            if current.handler.can_handle(request) {
                debug!(handler = current.handler.name(), request, "request handled");
                current.handler.process(request, out)?;
                return Ok(Outcome::Handled {
                    by: current.handler.name(),
                });
            }
            trace!(handler = current.handler.name(), request, "forwarding");
            node = current.next.as_deref();
        }
        debug!(request, "request dropped by chain");
        Ok(Outcome::Dropped)
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let chain = HandlerChain::new(AuthHandler).then(LogHandler);
    for request in ["auth", "log", "other"] {
        chain.handle(request, out)?;
    }
    Ok(())
}
