//! rbp-util - Foundation types shared by the lexer and parser crates.
//!
//! This crate provides the two pieces of infrastructure every other crate in
//! the workspace leans on: source location tracking ([`Span`]) and diagnostic
//! collection ([`Handler`], [`Diagnostic`], [`Level`]).
//!
//! Parsing in this workspace is best-effort. Nothing in the parse path
//! returns an error; instead, anything worth telling the user about is
//! recorded on a [`Handler`] and drained by the caller once the run is over.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::Span;
