//! Shared code generation utilities for the sharpgen C# class generator.
//!
//! This crate provides the language-agnostic pieces that renderers are built
//! from, plus the dispatch layer that picks a renderer per artifact kind.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`dispatch`] - Artifact kind dispatch and the DeclarationRenderer trait
//! - [`language`] - Language-specific generator trait (LanguageCodegen, PreviewFile, etc.)

pub mod builder;
mod dispatch;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use dispatch::{DeclarationRenderer, dispatch};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
