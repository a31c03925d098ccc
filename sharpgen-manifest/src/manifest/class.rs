//! The `[class]` table and its members.

use serde::Deserialize;
use sharpgen_ir::{
    AccessModifier, ClassDescriptor, MethodDescriptor, ParameterDescriptor, VariableDescriptor,
};
use toml::Spanned;

use super::ParseContext;
use crate::Result;

/// Class declaration from `[class]`
#[derive(Debug, Clone, Deserialize)]
pub struct ClassConfig {
    /// Class name
    pub name: String,

    /// Access modifier (default: public)
    #[serde(default = "default_class_access")]
    pub access: AccessModifier,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldConfig>,

    /// Methods in declaration order
    #[serde(default)]
    pub methods: Vec<MethodConfig>,
}

/// A field from `[[class.fields]]`
#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    /// Access modifier (default: private)
    #[serde(default)]
    pub access: AccessModifier,

    #[serde(rename = "type")]
    pub ty: String,

    /// Wrapped in Spanned so duplicates can be pointed at
    pub name: Spanned<String>,
}

/// A method from `[[class.methods]]`
#[derive(Debug, Clone, Deserialize)]
pub struct MethodConfig {
    /// Access modifier (default: public)
    #[serde(default = "default_method_access")]
    pub access: AccessModifier,

    /// Return type (default: void)
    #[serde(default = "default_returns")]
    pub returns: String,

    pub name: String,

    /// Parameters in declaration order
    #[serde(default)]
    pub params: Vec<ParamConfig>,
}

/// A method parameter, written inline as `{ type = "int", name = "count" }`
#[derive(Debug, Clone, Deserialize)]
pub struct ParamConfig {
    #[serde(rename = "type")]
    pub ty: String,

    /// Wrapped in Spanned so duplicates can be pointed at
    pub name: Spanned<String>,
}

fn default_class_access() -> AccessModifier {
    AccessModifier::Public
}

fn default_method_access() -> AccessModifier {
    AccessModifier::Public
}

fn default_returns() -> String {
    "void".to_string()
}

impl ClassConfig {
    /// Validate the class and all of its members.
    pub fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        ctx.validate_name(&self.name, "class")?;

        let class_ctx = ctx.push(&self.name);

        for field in &self.fields {
            class_ctx.validate_name(field.name(), "field")?;
            class_ctx.validate_type(&field.ty, "type", "field")?;
        }
        class_ctx.validate_unique(self.fields.iter().map(|f| &f.name), "field")?;

        for method in &self.methods {
            method.validate(&class_ctx)?;
        }

        Ok(())
    }

    /// Convert to a class descriptor, keeping member order.
    pub fn to_descriptor(&self) -> ClassDescriptor {
        ClassDescriptor::new(&self.name)
            .access(self.access)
            .variables(self.fields.iter().map(FieldConfig::to_descriptor))
            .methods(self.methods.iter().map(MethodConfig::to_descriptor))
    }
}

impl FieldConfig {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn to_descriptor(&self) -> VariableDescriptor {
        VariableDescriptor::new(self.access, &self.ty, self.name())
    }
}

impl MethodConfig {
    /// Validate the method signature.
    pub fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        ctx.validate_name(&self.name, "method")?;
        ctx.validate_type(&self.returns, "returns", "method")?;

        let method_ctx = ctx.push(&self.name);
        for param in &self.params {
            method_ctx.validate_name(param.name(), "parameter")?;
            method_ctx.validate_type(&param.ty, "type", "parameter")?;
        }
        method_ctx.validate_unique(self.params.iter().map(|p| &p.name), "parameter")?;

        Ok(())
    }

    pub fn to_descriptor(&self) -> MethodDescriptor {
        MethodDescriptor::new(self.access, &self.returns, &self.name)
            .params(self.params.iter().map(ParamConfig::to_descriptor))
    }

    /// The signature without its access modifier, e.g. `void Speak(string words)`.
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}({})", self.returns, self.name, params)
    }
}

impl ParamConfig {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn to_descriptor(&self) -> ParameterDescriptor {
        ParameterDescriptor::new(&self.ty, self.name())
    }
}
