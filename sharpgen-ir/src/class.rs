//! Class, field, method and parameter descriptors.

use serde::{Deserialize, Serialize};

use crate::AccessModifier;

/// A field declared on a class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VariableDescriptor {
    /// Access modifier of the field.
    pub access: AccessModifier,
    /// Type name as written in source (e.g., "string", "List<int>").
    pub ty: String,
    /// Field identifier.
    pub name: String,
}

impl VariableDescriptor {
    /// Create a new field descriptor.
    pub fn new(access: AccessModifier, ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            access,
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A single method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParameterDescriptor {
    /// Parameter type name.
    pub ty: String,
    /// Parameter identifier.
    pub name: String,
}

impl ParameterDescriptor {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A method declared on a class.
///
/// Methods carry a signature only; their bodies are always generated empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MethodDescriptor {
    /// Access modifier of the method.
    pub access: AccessModifier,
    /// Return type name (`void` for no return value).
    pub return_type: String,
    /// Method identifier.
    pub name: String,
    /// Parameters in declaration order.
    pub params: Vec<ParameterDescriptor>,
}

impl MethodDescriptor {
    /// Create a parameterless method descriptor.
    pub fn new(
        access: AccessModifier,
        return_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            access,
            return_type: return_type.into(),
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter.
    pub fn param(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.params.push(ParameterDescriptor::new(ty, name));
        self
    }

    /// Add multiple parameters.
    pub fn params(mut self, params: impl IntoIterator<Item = ParameterDescriptor>) -> Self {
        self.params.extend(params);
        self
    }

    /// Check if this method takes any parameters.
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }
}

/// A class to be generated.
///
/// `variables` and `methods` keep insertion order, and that order is the
/// order members appear in the generated source. Duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClassDescriptor {
    /// Class name, also the base of the output file name.
    pub name: String,
    /// Access modifier of the class.
    pub access: AccessModifier,
    /// Fields in declaration order.
    pub variables: Vec<VariableDescriptor>,
    /// Methods in declaration order.
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    /// Create a new public class descriptor with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessModifier::Public,
            variables: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set the access modifier.
    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    /// Add a field.
    pub fn variable(mut self, variable: VariableDescriptor) -> Self {
        self.variables.push(variable);
        self
    }

    /// Add multiple fields.
    pub fn variables(mut self, variables: impl IntoIterator<Item = VariableDescriptor>) -> Self {
        self.variables.extend(variables);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Add multiple methods.
    pub fn methods(mut self, methods: impl IntoIterator<Item = MethodDescriptor>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Check if this class declares any fields or methods.
    pub fn has_members(&self) -> bool {
        !self.variables.is_empty() || !self.methods.is_empty()
    }

    /// Suggested output file name without extension.
    pub fn file_stem(&self) -> &str {
        &self.name
    }
}
