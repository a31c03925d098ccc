//! Access modifiers for classes and their members.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Visibility of a class, field or method.
///
/// The canonical names are snake_case (`private_protected`). The two-word
/// C# spelling (`private protected`) is accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessModifier {
    /// `public`
    Public,
    /// `private`, the C# default for members
    #[default]
    Private,
    /// `protected`
    Protected,
    /// `internal`
    Internal,
    /// `private protected`
    #[serde(alias = "private protected")]
    PrivateProtected,
    /// `protected internal`
    #[serde(alias = "protected internal")]
    ProtectedInternal,
}

impl AccessModifier {
    /// Every access modifier, in declaration order.
    pub const ALL: [AccessModifier; 6] = [
        AccessModifier::Public,
        AccessModifier::Private,
        AccessModifier::Protected,
        AccessModifier::Internal,
        AccessModifier::PrivateProtected,
        AccessModifier::ProtectedInternal,
    ];

    /// Returns the canonical identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Private => "private",
            AccessModifier::Protected => "protected",
            AccessModifier::Internal => "internal",
            AccessModifier::PrivateProtected => "private_protected",
            AccessModifier::ProtectedInternal => "protected_internal",
        }
    }

    /// Check if this is a compound (two-word) modifier.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            AccessModifier::PrivateProtected | AccessModifier::ProtectedInternal
        )
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessModifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();

        match normalized.as_str() {
            "public" => Ok(AccessModifier::Public),
            "private" => Ok(AccessModifier::Private),
            "protected" => Ok(AccessModifier::Protected),
            "internal" => Ok(AccessModifier::Internal),
            "private_protected" => Ok(AccessModifier::PrivateProtected),
            "protected_internal" => Ok(AccessModifier::ProtectedInternal),
            _ => Err(format!(
                "unknown access modifier '{}', expected one of: public, private, protected, \
                 internal, private protected, protected internal",
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
        assert_eq!(
            AccessModifier::from_str("public").unwrap(),
            AccessModifier::Public
        );
        assert_eq!(
            AccessModifier::from_str("Internal").unwrap(),
            AccessModifier::Internal
        );
        assert_eq!(
            AccessModifier::from_str("private protected").unwrap(),
            AccessModifier::PrivateProtected
        );
        assert_eq!(
            AccessModifier::from_str("protected_internal").unwrap(),
            AccessModifier::ProtectedInternal
        );
        assert_eq!(
            AccessModifier::from_str("protected-internal").unwrap(),
            AccessModifier::ProtectedInternal
        );
        assert!(AccessModifier::from_str("friend").is_err());
        assert!(AccessModifier::from_str("").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for access in AccessModifier::ALL {
            assert_eq!(AccessModifier::from_str(&access.to_string()), Ok(access));
        }
    }

    #[test]
    fn test_default_is_private() {
        assert_eq!(AccessModifier::default(), AccessModifier::Private);
    }

    #[test]
    fn test_is_compound() {
        assert!(AccessModifier::PrivateProtected.is_compound());
        assert!(AccessModifier::ProtectedInternal.is_compound());
        assert!(!AccessModifier::Public.is_compound());
        assert!(!AccessModifier::Internal.is_compound());
    }

    #[test]
    fn test_deserialize() {
        let public: AccessModifier = serde_json::from_str(r#""public""#).unwrap();
        assert_eq!(public, AccessModifier::Public);

        let snake: AccessModifier = serde_json::from_str(r#""private_protected""#).unwrap();
        assert_eq!(snake, AccessModifier::PrivateProtected);

        let spaced: AccessModifier = serde_json::from_str(r#""protected internal""#).unwrap();
        assert_eq!(spaced, AccessModifier::ProtectedInternal);

        assert!(serde_json::from_str::<AccessModifier>(r#""sealed""#).is_err());
    }
}
