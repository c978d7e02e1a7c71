use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Deterministic SQL-safe alias for a pattern element with no bound
/// variable.
///
/// The element's type name and structural position are base64-encoded,
/// every non-alphanumeric character is dropped, and the remainder is
/// wrapped in a literal `X` so the alias starts with a letter. The same
/// `(type, position)` pair always yields the same alias.
pub(crate) fn synthesized_alias(type_name: &str, position: usize) -> String {
    let encoded = BASE64.encode(format!("{type_name}{position}"));
    let mut alias = String::with_capacity(encoded.len() + 2);
    alias.push('X');
    alias.extend(encoded.chars().filter(char::is_ascii_alphanumeric));
    alias.push('X');
    alias
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("term_doc", 0, "XdGVybV9kb2MwX"; "edge table at position zero")]
    #[test_case("docs", 0, "XZG9jczAX"; "padding characters are dropped")]
    fn known_aliases(type_name: &str, position: usize, expected: &str) {
        assert_eq!(synthesized_alias(type_name, position), expected);
    }

    #[test]
    fn stable_across_calls() {
        assert_eq!(
            synthesized_alias("entities", 3),
            synthesized_alias("entities", 3)
        );
    }

    #[test]
    fn distinct_positions_get_distinct_aliases() {
        assert_ne!(synthesized_alias("docs", 0), synthesized_alias("docs", 1));
    }

    #[test]
    fn aliases_are_identifier_safe() {
        let alias = synthesized_alias("doc_author", 12);
        assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(alias.starts_with('X') && alias.ends_with('X'));
    }
}
