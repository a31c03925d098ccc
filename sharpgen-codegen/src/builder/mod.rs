//! Code generation building blocks.
//!
//! This module provides the core primitives for generating code:
//! - [`CodeBuilder`] - Fluent API for building indented lines
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
