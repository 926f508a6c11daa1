//! Identifier derivation for generated Go code.

use heck::ToUpperCamelCase;

/// Client method names that would collide with something on the generated
/// client type. Colliding names get a `_` suffix.
const RESERVED_CLIENT_NAMES: &[&str] = &[];

/// Derive an exported Go identifier from a raw proto name.
pub fn exported(raw: &str) -> String {
    raw.to_upper_camel_case()
}

/// Derive the identifier for a generated client method.
pub fn client_method_name(raw: &str) -> String {
    client_method_name_in(raw, RESERVED_CLIENT_NAMES)
}

fn client_method_name_in(raw: &str, reserved: &[&str]) -> String {
    let name = exported(raw);
    if reserved.contains(&name.as_str()) {
        format!("{name}_")
    } else {
        name
    }
}

/// Lowercase only the first character, for unexported field names.
pub fn unexport(ident: &str) -> String {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_camel_cases() {
        assert_eq!(exported("say"), "Say");
        assert_eq!(exported("say_hello"), "SayHello");
        assert_eq!(exported("SayHello"), "SayHello");
    }

    #[test]
    fn client_method_name_is_deterministic() {
        assert_eq!(client_method_name("get_user"), client_method_name("get_user"));
        assert_eq!(client_method_name("get_user"), "GetUser");
    }

    #[test]
    fn reserved_names_get_suffixed() {
        // The live set is empty; exercise the mechanism with an injected set.
        assert_eq!(client_method_name_in("close", &["Close"]), "Close_");
        assert_eq!(client_method_name_in("open", &["Close"]), "Open");
    }

    #[test]
    fn unexport_touches_only_the_first_char() {
        assert_eq!(unexport("Client"), "client");
        assert_eq!(unexport("HTTPClient"), "hTTPClient");
        assert_eq!(unexport(""), "");
    }
}
