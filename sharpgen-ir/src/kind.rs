//! Kinds of source artifact the generator can be asked for.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The declaration category requested from the dispatch layer.
///
/// Only [`ArtifactKind::Class`] has a rendering contract. The other kinds
/// are accepted everywhere but render to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// A class declaration
    #[default]
    Class,
    /// An interface declaration
    Interface,
    /// An enum declaration
    Enum,
    /// A struct declaration
    Struct,
    /// A source file with no declarations
    #[serde(alias = "empty-file", alias = "empty")]
    EmptyFile,
}

impl ArtifactKind {
    /// Every artifact kind, in declaration order.
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Class,
        ArtifactKind::Interface,
        ArtifactKind::Enum,
        ArtifactKind::Struct,
        ArtifactKind::EmptyFile,
    ];

    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Class => "class",
            ArtifactKind::Interface => "interface",
            ArtifactKind::Enum => "enum",
            ArtifactKind::Struct => "struct",
            ArtifactKind::EmptyFile => "empty_file",
        }
    }

    /// Whether a renderer exists for this kind.
    pub fn is_implemented(&self) -> bool {
        matches!(self, ArtifactKind::Class)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "class" => Ok(ArtifactKind::Class),
            "interface" => Ok(ArtifactKind::Interface),
            "enum" => Ok(ArtifactKind::Enum),
            "struct" => Ok(ArtifactKind::Struct),
            "empty_file" | "empty-file" | "empty" => Ok(ArtifactKind::EmptyFile),
            _ => Err(format!(
                "unknown artifact kind '{}', expected one of: class, interface, enum, struct, empty_file",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(ArtifactKind::from_str("class").unwrap(), ArtifactKind::Class);
        assert_eq!(
            ArtifactKind::from_str("Interface").unwrap(),
            ArtifactKind::Interface
        );
        assert_eq!(
            ArtifactKind::from_str("empty-file").unwrap(),
            ArtifactKind::EmptyFile
        );
        assert_eq!(
            ArtifactKind::from_str("empty").unwrap(),
            ArtifactKind::EmptyFile
        );
        assert!(ArtifactKind::from_str("record").is_err());
    }

    #[test]
    fn test_only_class_is_implemented() {
        let implemented: Vec<_> = ArtifactKind::ALL
            .into_iter()
            .filter(ArtifactKind::is_implemented)
            .collect();
        assert_eq!(implemented, vec![ArtifactKind::Class]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ArtifactKind::Class.to_string(), "class");
        assert_eq!(ArtifactKind::EmptyFile.to_string(), "empty_file");
    }

    #[test]
    fn test_deserialize() {
        let kind: ArtifactKind = serde_json::from_str(r#""struct""#).unwrap();
        assert_eq!(kind, ArtifactKind::Struct);

        let kind: ArtifactKind = serde_json::from_str(r#""empty-file""#).unwrap();
        assert_eq!(kind, ArtifactKind::EmptyFile);
    }
}
