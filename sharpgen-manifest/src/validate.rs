//! Validation utilities for C# identifiers and type names

use miette::SourceSpan;

/// C# reserved keywords that cannot be used as bare identifiers
/// Source: https://learn.microsoft.com/dotnet/csharp/language-reference/keywords/
pub(crate) const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a C# reserved keyword
pub(crate) fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Find the span of a `key = "value"` assignment's value in the TOML source.
///
/// Matches both basic and literal strings, with or without spaces around `=`.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    find_value_spans(src, key, value).into_iter().next()
}

/// Find every span where `key` is assigned `value` in the TOML source, in order.
pub(crate) fn find_value_spans(src: &str, key: &str, value: &str) -> Vec<SourceSpan> {
    let patterns = [
        format!("{} = \"{}\"", key, value),
        format!("{}=\"{}\"", key, value),
        format!("{} = '{}'", key, value),
        format!("{}='{}'", key, value),
    ];

    let mut spans: Vec<SourceSpan> = patterns
        .iter()
        .flat_map(|pattern| {
            // The value starts after the key, the `=` and the opening quote
            let skip = pattern.len() - value.len() - 1;
            src.match_indices(pattern.as_str())
                .filter(move |(pos, _)| is_key_start(src, *pos))
                .map(move |(pos, _)| SourceSpan::from((pos + skip, value.len())))
        })
        .collect();

    spans.sort_by_key(|span| span.offset());
    spans
}

/// Check that a match at `pos` is not the tail of a longer key (`rename = ` vs `name = `).
fn is_key_start(src: &str, pos: usize) -> bool {
    src[..pos]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '-'))
}

/// Find the span of a member name in the TOML source
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    find_value_span(src, "name", name)
}

/// Validate that a name is a valid C# identifier
/// Returns None if valid, Some(reason) if invalid
///
/// A leading `@` marks a verbatim identifier, which may spell a keyword.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let (verbatim, ident) = match name.strip_prefix('@') {
        Some(rest) => (true, rest),
        None => (false, name),
    };

    if ident.is_empty() {
        return Some("name cannot be empty");
    }

    if !verbatim && is_csharp_keyword(ident) {
        return Some("name is a C# reserved keyword");
    }

    let mut chars = ident.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, digits, and underscores");
    }

    None
}

/// Validate that a type name is well formed
/// Returns None if valid, Some(reason) if invalid
///
/// Accepts dotted names, generic arguments, array ranks and nullable
/// suffixes (`System.Collections.Generic.Dictionary<string, int[]>?`).
/// The only whitespace allowed is a single space after a comma inside
/// brackets.
pub(crate) fn validate_type_name(ty: &str) -> Option<&'static str> {
    match ty.chars().next() {
        None => return Some("type cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("type must start with a letter or underscore"),
    }

    let mut open: Vec<char> = Vec::new();
    let mut prev = '\0';

    for c in ty.chars() {
        match c {
            '<' | '[' => open.push(c),
            '>' => {
                if open.pop() != Some('<') {
                    return Some("type has an unbalanced '>'");
                }
            }
            ']' => {
                if open.pop() != Some('[') {
                    return Some("type has an unbalanced ']'");
                }
            }
            ',' => {
                if open.is_empty() {
                    return Some("commas are only allowed inside '<>' or '[]'");
                }
            }
            ' ' => {
                if prev != ',' {
                    return Some("spaces are only allowed after a comma");
                }
            }
            '.' | '?' | '_' => {}
            c if c.is_alphanumeric() => {}
            _ => return Some("type must contain only letters, digits, and '_.<>[],?'"),
        }
        prev = c;
    }

    if !open.is_empty() {
        return Some("type has an unclosed '<' or '['");
    }

    None
}
