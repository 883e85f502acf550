//! # Behavioral Design Patterns in Rust
//!
//! Ten classic behavioral patterns, each as a small self-contained module
//! with a `demo` function:
//!
//! - [`chain`] - Chain of Responsibility: a request travels a list of handlers
//! - [`command`] - Command: a call on a receiver wrapped as an object
//! - [`iterator`] - Iterator: restartable cursors over a fixed collection
//! - [`mediator`] - Mediator: users talk only through a chat
//! - [`memento`] - Memento: snapshot and restore an originator's state
//! - [`observer`] - Observer: one subject, many subscribers
//! - [`state`] - State: behaviour swapped at runtime
//! - [`strategy`] - Strategy: interchangeable algorithms
//! - [`template_method`] - Template Method: fixed steps, variable bodies
//! - [`visitor`] - Visitor: double dispatch over element kinds
//!
//! All output goes to an injected [`std::io::Write`], never straight to
//! stdout. Run the whole catalog with:
//! ```bash
//! cargo run
//! ```
//!
//! Or a single pattern:
//! ```bash
//! cargo run --example p06_observer
//! ```

pub mod chain;
pub mod command;
pub mod demo;
pub mod error;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;

pub use error::{PatternError, Result};
