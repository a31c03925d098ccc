//! File and type naming helpers.

/// Build a source file name from a base name and an extension.
///
/// The extension is appended exactly once: a stem that already carries it
/// is returned unchanged, so `Animal.cs` never becomes `Animal.cs.cs`.
pub fn source_file_name(stem: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        return stem.to_string();
    }

    let suffix = format!(".{}", extension);
    let already_suffixed = stem.len() > suffix.len()
        && stem
            .get(stem.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(&suffix));

    if already_suffixed {
        stem.to_string()
    } else {
        format!("{}{}", stem, suffix)
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_name() {
        assert_eq!(source_file_name("Animal", "cs"), "Animal.cs");
        assert_eq!(source_file_name("Animal", ".cs"), "Animal.cs");
        assert_eq!(source_file_name("Animal", ""), "Animal");
    }

    #[test]
    fn test_source_file_name_does_not_double_extension() {
        assert_eq!(source_file_name("Animal.cs", "cs"), "Animal.cs");
        assert_eq!(source_file_name("Animal.CS", "cs"), "Animal.CS");
        assert_eq!(source_file_name(".cs", "cs"), ".cs.cs");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("order-line item"), "OrderLineItem");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }
}
