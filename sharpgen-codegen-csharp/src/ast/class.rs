//! C# class builder.

use sharpgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};
use sharpgen_ir::{AccessModifier, ClassDescriptor, VariableDescriptor};

use super::Method;
use crate::access_keyword;

/// A field in a C# class.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub access: AccessModifier,
}

impl Field {
    /// Create a new private field.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            access: AccessModifier::Private,
        }
    }

    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    /// The declaration line, e.g. `private string name;`.
    pub fn declaration(&self) -> String {
        format!("{} {} {};", access_keyword(self.access), self.ty, self.name)
    }
}

impl From<&VariableDescriptor> for Field {
    fn from(variable: &VariableDescriptor) -> Self {
        Self::new(&variable.name, &variable.ty).access(variable.access)
    }
}

/// Builder for C# classes.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    access: AccessModifier,
    fields: Vec<Field>,
    methods: Vec<Method>,
}

impl Class {
    /// Create a new public class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessModifier::Public,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.methods.is_empty()
    }

    /// The declaration line, e.g. `public class Animal`.
    pub fn header(&self) -> String {
        format!("{} class {}", access_keyword(self.access), self.name)
    }

    /// Render the class to lines with the given indentation.
    pub fn lines(&self, indent: Indent) -> Vec<String> {
        let mut builder = CodeBuilder::new(indent);
        builder.emit(self);
        builder.into_lines()
    }

    fn members_to_fragments(&self) -> Vec<CodeFragment> {
        let fields = self
            .fields
            .iter()
            .map(|field| CodeFragment::Line(field.declaration()));
        let methods = self.methods.iter().flat_map(|method| method.to_fragments());

        fields.chain(methods).collect()
    }
}

impl From<&ClassDescriptor> for Class {
    fn from(class: &ClassDescriptor) -> Self {
        Self {
            name: class.name.clone(),
            access: class.access,
            fields: class.variables.iter().map(Field::from).collect(),
            methods: class.methods.iter().map(Method::from).collect(),
        }
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.is_empty() {
            vec![
                CodeFragment::Line(self.header()),
                CodeFragment::line("{}"),
            ]
        } else {
            vec![CodeFragment::braced(
                self.header(),
                self.members_to_fragments(),
            )]
        }
    }
}
