//! Descriptor types for the sharpgen C# class generator.
//!
//! This crate provides the plain data records that describe a class to be
//! generated. They are built by a collaborator (the manifest loader, or any
//! caller holding already-validated input) and consumed read-only by the
//! renderers in `sharpgen-codegen-csharp`.
//!
//! # Architecture
//!
//! ```text
//! class.toml (TOML) → sharpgen-manifest (parsing) → sharpgen-ir (descriptors) → codegen
//! ```
//!
//! The descriptor types are:
//! - Order-preserving (members render in insertion order)
//! - Trusted by the renderer (well-formedness is checked before construction)
//! - Self-contained (no dependencies beyond serde)

mod access;
mod class;
mod kind;

pub use access::AccessModifier;
pub use class::{ClassDescriptor, MethodDescriptor, ParameterDescriptor, VariableDescriptor};
pub use kind::ArtifactKind;
