//! Snapshot tests for C# code generation.
//!
//! These tests verify that the generated C# code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use sharpgen_codegen_csharp::{Generator, LanguageCodegen};
use sharpgen_ir::{AccessModifier, ClassDescriptor, MethodDescriptor, VariableDescriptor};

/// Generate the single class file and return its content.
fn generate_content(class: &ClassDescriptor) -> String {
    let files = Generator::new(class).preview();
    assert_eq!(files.len(), 1, "expected exactly one generated file");
    files.into_iter().next().map(|f| f.content).unwrap_or_default()
}

#[test]
fn test_animal_class() {
    let class = ClassDescriptor::new("Animal")
        .variable(VariableDescriptor::new(
            AccessModifier::Private,
            "string",
            "name",
        ))
        .method(MethodDescriptor::new(AccessModifier::Public, "void", "Speak"));

    insta::assert_snapshot!("animal_class", generate_content(&class));
}

#[test]
fn test_inventory_class() {
    let class = ClassDescriptor::new("Inventory")
        .access(AccessModifier::Internal)
        .variable(VariableDescriptor::new(
            AccessModifier::Private,
            "List<Item>",
            "items",
        ))
        .variable(VariableDescriptor::new(
            AccessModifier::ProtectedInternal,
            "int",
            "capacity",
        ))
        .variable(VariableDescriptor::new(
            AccessModifier::PrivateProtected,
            "Dictionary<string, int>",
            "counts",
        ))
        .method(
            MethodDescriptor::new(AccessModifier::Public, "bool", "Add")
                .param("Item", "item")
                .param("int", "quantity"),
        )
        .method(MethodDescriptor::new(
            AccessModifier::Protected,
            "void",
            "Clear",
        ))
        .method(
            MethodDescriptor::new(AccessModifier::Internal, "Item[]", "Find")
                .param("string", "name"),
        );

    insta::assert_snapshot!("inventory_class", generate_content(&class));
}

#[test]
fn test_empty_class() {
    let class = ClassDescriptor::new("Marker");

    insta::assert_snapshot!("empty_class", generate_content(&class));
}
