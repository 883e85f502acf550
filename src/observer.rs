//! Observer
//!
//! `NewsAgency` pushes each message to every attached observer, in the order
//! they were attached. Observers can be detached by the id returned from
//! `attach`.

use std::io::Write;

use tracing::debug;

use crate::Result;

pub trait Observer {
    fn update(&self, message: &str, out: &mut dyn Write) -> Result<()>;
}

pub struct NewsReader {
    name: String,
}

impl NewsReader {
    pub fn new(name: impl Into<String>) -> Self {
        NewsReader { name: name.into() }
    }
}

impl Observer for NewsReader {
    fn update(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} received news: {}", self.name, message)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub struct NewsAgency {
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: u64,
}

impl NewsAgency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer. The same observer may be attached more than once.
    pub fn attach(&mut self, observer: impl Observer + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(observers = self.observers.len(), "observer attached");
        id
    }

    pub fn detach(&mut self, id: ObserverId) -> Option<Box<dyn Observer>> {
        let index = self.observers.iter().position(|(other, _)| *other == id)?;
        let (_, observer) = self.observers.remove(index);
        debug!(observers = self.observers.len(), "observer detached");
        Some(observer)
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Returns how many observers were notified.
    pub fn notify(&self, message: &str, out: &mut dyn Write) -> Result<usize> {
        for (_, observer) in &self.observers {
            observer.update(message, out)?;
        }
        Ok(self.observers.len())
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let mut agency = NewsAgency::new();
    agency.attach(NewsReader::new("Reader1"));
    agency.attach(NewsReader::new("Reader2"));

    agency.notify("Breaking news!", out)?;
    Ok(())
}
