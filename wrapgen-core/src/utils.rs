//! Word-list helpers for building identifiers.
//!
//! Names are stored as lists of lowercase words; every spelling is derived
//! from that list on demand.

/// Uppercase the first character of a word (e.g., "proxy" -> "Proxy")
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Split a snake_case identifier into lowercase words (e.g., "proxy_config" -> ["proxy", "config"])
///
/// Empty segments produced by leading, trailing or doubled underscores are dropped.
pub fn split_words(s: &str) -> Vec<String> {
    s.split('_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Join words as CamelCase, optionally keeping the first word lowercase.
pub fn join_camel_case<S: AsRef<str>>(words: &[S], lower_first: bool) -> String {
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 && lower_first {
            result.push_str(&word.as_ref().to_lowercase());
        } else {
            result.push_str(&capitalize(word.as_ref()));
        }
    }
    result
}

/// Join words with underscores (e.g., ["proxy", "config"] -> "proxy_config")
pub fn join_snake_case<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Join words without separator, in lower or upper case.
pub fn concatenate_words<S: AsRef<str>>(words: &[S], upper: bool) -> String {
    words
        .iter()
        .map(|w| {
            if upper {
                w.as_ref().to_uppercase()
            } else {
                w.as_ref().to_lowercase()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("h"), "H");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("proxy_config"), vec!["proxy", "config"]);
        assert_eq!(split_words("Core"), vec!["core"]);
        assert_eq!(split_words("_a__b_"), vec!["a", "b"]);
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_join_camel_case() {
        let words = ["get", "default", "proxy"];
        assert_eq!(join_camel_case(&words, false), "GetDefaultProxy");
        assert_eq!(join_camel_case(&words, true), "getDefaultProxy");
        assert_eq!(join_camel_case::<&str>(&[], true), "");
    }

    #[test]
    fn test_join_snake_case() {
        assert_eq!(join_snake_case(&["proxy", "config"]), "proxy_config");
        assert_eq!(join_snake_case(&["core"]), "core");
    }

    #[test]
    fn test_concatenate_words() {
        assert_eq!(concatenate_words(&["belle", "sip"], false), "bellesip");
        assert_eq!(concatenate_words(&["belle", "sip"], true), "BELLESIP");
    }
}
