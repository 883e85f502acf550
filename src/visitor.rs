//! Visitor
//!
//! Elements know only how to hand themselves to a visitor; each visitor
//! decides what to do per element kind. New visitors need no element
//! changes, new element kinds need a new `Visitor` method.

use std::io::Write;

use crate::Result;

pub trait Visitor {
    fn visit_book(&mut self, book: &Book, out: &mut dyn Write) -> Result<()>;

    fn visit_pen(&mut self, pen: &Pen, out: &mut dyn Write) -> Result<()>;
}

pub trait Element {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub price: u32,
}

impl Book {
    pub fn new(title: impl Into<String>, price: u32) -> Self {
        Book {
            title: title.into(),
            price,
        }
    }
}

impl Element for Book {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut dyn Write) -> Result<()> {
        visitor.visit_book(self, out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pen {
    pub color: String,
    pub price: u32,
}

impl Pen {
    pub fn new(color: impl Into<String>, price: u32) -> Self {
        Pen {
            color: color.into(),
            price,
        }
    }
}

impl Element for Pen {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut dyn Write) -> Result<()> {
        visitor.visit_pen(self, out)
    }
}

/// Prints each item's price and keeps a running total. The total is
/// widened to `u64` and saturates instead of overflowing.
#[derive(Debug, Default)]
pub struct PriceVisitor {
    total: u64,
}

impl PriceVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Visitor for PriceVisitor {
    fn visit_book(&mut self, book: &Book, out: &mut dyn Write) -> Result<()> {
        self.total = self.total.saturating_add(u64::from(book.price));
        writeln!(out, "Book price: {}", book.price)?;
        Ok(())
    }

    fn visit_pen(&mut self, pen: &Pen, out: &mut dyn Write) -> Result<()> {
        self.total = self.total.saturating_add(u64::from(pen.price));
        writeln!(out, "Pen price: {}", pen.price)?;
        Ok(())
    }
}

/// Describes items without touching prices.
#[derive(Debug, Default)]
pub struct LabelVisitor;

impl Visitor for LabelVisitor {
    fn visit_book(&mut self, book: &Book, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Book \"{}\"", book.title)?;
        Ok(())
    }

    fn visit_pen(&mut self, pen: &Pen, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} pen", pen.color)?;
        Ok(())
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let items: Vec<Box<dyn Element>> = vec![
        Box::new(Book::new("Design Patterns", 100)),
        Box::new(Pen::new("Blue", 10)),
    ];

    let mut visitor = PriceVisitor::new();
    for item in &items {
        item.accept(&mut visitor, out)?;
    }
    Ok(())
}
