//! C# AST builders for generating class declarations.
//!
//! These provide a high-level API for constructing C# syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod method;

pub use class::{Class, Field};
pub use method::{Method, Param};
