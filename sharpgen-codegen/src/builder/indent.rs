//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (2, 4 or 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (C# default).
    pub const CSHARP: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const COMPACT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    ///
    /// Space widths other than 2, 4 and 8 render as 4 spaces; see
    /// [`is_supported`](Self::is_supported).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }

    /// Whether this indent renders exactly as configured.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Spaces(2 | 4 | 8) | Self::Tab)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(8).as_str(), "        ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_unsupported_width_falls_back() {
        assert!(!Indent::Spaces(3).is_supported());
        assert_eq!(Indent::Spaces(3).as_str(), "    ");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::CSHARP);
        assert_eq!(Indent::CSHARP, Indent::Spaces(4));
    }
}
