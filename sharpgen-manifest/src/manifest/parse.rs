//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "class.toml")
    }
}

impl Manifest {
    /// Parse a class.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a class.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;

    tracing::debug!(
        filename,
        class = %manifest.class.name,
        kind = %manifest.kind,
        fields = manifest.class.fields.len(),
        methods = manifest.class.methods.len(),
        "parsed class manifest"
    );
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    manifest.class.validate(&ctx)?;
    manifest.output.validate(&ctx)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use sharpgen_codegen::Indent;
    use sharpgen_ir::{AccessModifier, ArtifactKind};

    use super::*;

    const ANIMAL: &str = r#"
[class]
name = "Animal"

[[class.fields]]
type = "string"
name = "name"

[[class.methods]]
name = "Speak"
"#;

    #[test]
    fn test_parse_minimal() {
        let manifest: Manifest = ANIMAL.parse().unwrap();

        assert_eq!(manifest.kind, ArtifactKind::Class);
        assert_eq!(manifest.class.name, "Animal");
        assert_eq!(manifest.class.access, AccessModifier::Public);
        assert_eq!(manifest.class.fields[0].access, AccessModifier::Private);
        assert_eq!(manifest.class.methods[0].access, AccessModifier::Public);
        assert_eq!(manifest.class.methods[0].returns, "void");
        assert!(manifest.class.methods[0].params.is_empty());
        assert_eq!(manifest.output.indent, Indent::CSHARP);
    }

    #[test]
    fn test_parse_full() {
        let src = r#"
kind = "class"

[class]
name = "Inventory"
access = "internal"

[[class.fields]]
access = "protected internal"
type = "Dictionary<string, int>"
name = "counts"

[[class.methods]]
access = "private_protected"
returns = "bool"
name = "Add"
params = [{ type = "string", name = "item" }, { type = "int", name = "quantity" }]

[output]
indent = "tab"
extension = "g.cs"
overwrite = true
"#;
        let manifest: Manifest = src.parse().unwrap();

        assert_eq!(manifest.class.access, AccessModifier::Internal);
        assert_eq!(
            manifest.class.fields[0].access,
            AccessModifier::ProtectedInternal
        );
        let method = &manifest.class.methods[0];
        assert_eq!(method.access, AccessModifier::PrivateProtected);
        assert_eq!(method.signature(), "bool Add(string item, int quantity)");
        assert_eq!(manifest.output.indent, Indent::Tab);
        assert_eq!(manifest.output.extension, "g.cs");
        assert!(manifest.output.overwrite);
    }

    #[test]
    fn test_parse_other_kind() {
        let src = "kind = \"interface\"\n[class]\nname = \"IShape\"\n";
        let manifest: Manifest = src.parse().unwrap();
        assert_eq!(manifest.kind, ArtifactKind::Interface);
    }

    #[test]
    fn test_to_descriptor_keeps_order() {
        let src = r#"
[class]
name = "Point"

[[class.fields]]
type = "int"
name = "y"

[[class.fields]]
type = "int"
name = "x"

[[class.methods]]
name = "Move"
params = [{ type = "int", name = "dy" }, { type = "int", name = "dx" }]

[[class.methods]]
returns = "double"
name = "Length"
"#;
        let descriptor = src.parse::<Manifest>().unwrap().to_descriptor();

        let fields: Vec<_> = descriptor.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(fields, ["y", "x"]);
        let methods: Vec<_> = descriptor.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, ["Move", "Length"]);
        let params: Vec<_> = descriptor.methods[0]
            .params
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(params, ["dy", "dx"]);
        assert_eq!(descriptor.methods[1].return_type, "double");
    }

    #[test]
    fn test_methods_may_overload() {
        let src = r#"
[class]
name = "Printer"

[[class.methods]]
name = "Print"
params = [{ type = "int", name = "value" }]

[[class.methods]]
name = "Print"
params = [{ type = "string", name = "value" }]
"#;
        let manifest: Manifest = src.parse().unwrap();
        assert_eq!(manifest.class.methods.len(), 2);
    }

    #[test]
    fn test_missing_class_is_parse_error() {
        let err = "kind = \"class\"".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_access_is_parse_error() {
        let src = "[class]\nname = \"Animal\"\naccess = \"friend\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let src = "kind = \"record\"\n[class]\nname = \"Animal\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_str_with_filename() {
        let err = Manifest::from_str_with_filename("[class]\nname = \"class\"", "shapes.toml")
            .unwrap_err();
        match *err {
            Error::ReservedKeyword { src, .. } => assert_eq!(src.name(), "shapes.toml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
