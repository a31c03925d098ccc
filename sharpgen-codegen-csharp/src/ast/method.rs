//! C# method builder.

use sharpgen_codegen::builder::{CodeFragment, Renderable};
use sharpgen_ir::{AccessModifier, MethodDescriptor, ParameterDescriptor};

use crate::access_keyword;

/// A parameter in a C# method.
#[derive(Debug, Clone)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// Render as `<type> <name>`.
    pub fn render(&self) -> String {
        format!("{} {}", self.ty, self.name)
    }
}

impl From<&ParameterDescriptor> for Param {
    fn from(param: &ParameterDescriptor) -> Self {
        Self::new(&param.ty, &param.name)
    }
}

/// Builder for C# methods.
///
/// Bodies are always empty: a method renders as its signature followed by
/// `{` and `}` on separate lines.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    access: AccessModifier,
    return_type: String,
    params: Vec<Param>,
}

impl Method {
    /// Create a new public `void` method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessModifier::Public,
            return_type: "void".to_string(),
            params: Vec::new(),
        }
    }

    pub fn access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = ty.into();
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// The declaration line, e.g. `public int Add(int a, int b)`.
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{} {} {}({})",
            access_keyword(self.access),
            self.return_type,
            self.name,
            params
        )
    }
}

impl From<&MethodDescriptor> for Method {
    fn from(method: &MethodDescriptor) -> Self {
        method.params.iter().map(Param::from).fold(
            Method::new(&method.name)
                .access(method.access)
                .returns(&method.return_type),
            Method::param,
        )
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(self.signature(), Vec::new())]
    }
}
