//! `--key value` option parsing for the `/mode` command.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const FLAG_PREFIX: &str = "--";
const FLAG_DEFAULT_VALUE: &str = "true";

/// Options supplied after a mode name, keyed by flag name without `--`.
///
/// Keys are not validated; unknown flags are kept and persisted but ignored by
/// the mode registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet {
    values: BTreeMap<String, String>,
}

impl OptionSet {
    /// Parse option tokens.
    ///
    /// A `--name` token followed by a token that is not itself a flag takes
    /// that token as its value; otherwise its value is `true`. Stray values
    /// are ignored and a repeated flag keeps its last value.
    #[must_use]
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = tokens.into_iter().collect();
        let mut values = BTreeMap::new();
        let mut i = 0;
        while i < tokens.len() {
            let Some(key) = tokens[i].as_ref().strip_prefix(FLAG_PREFIX) else {
                i += 1;
                continue;
            };
            let next: Option<&str> = tokens.get(i + 1).map(AsRef::as_ref);
            match next {
                Some(next) if !next.starts_with(FLAG_PREFIX) => {
                    values.insert(key.to_string(), next.to_string());
                    i += 2;
                }
                _ => {
                    values.insert(key.to_string(), FLAG_DEFAULT_VALUE.to_string());
                    i += 1;
                }
            }
        }
        Self { values }
    }

    /// Value of an option, if supplied.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of an option, or `default` when it was not supplied.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no options were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OptionSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_parse_valued_and_boolean_flags() {
        let options = OptionSet::parse(["--style", "chicago", "--draft", "--genre", "mystery"]);
        assert_eq!(
            options,
            OptionSet::from_iter([("style", "chicago"), ("draft", "true"), ("genre", "mystery")])
        );
    }

    #[test]
    fn test_flag_followed_by_flag_is_true() {
        let options = OptionSet::parse(["--a", "--b", "x"]);
        assert_eq!(options.get("a"), Some("true"));
        assert_eq!(options.get("b"), Some("x"));
    }

    #[test]
    fn test_stray_values_are_ignored() {
        let options = OptionSet::parse(["loose", "--world", "eldoria.json", "extra"]);
        assert_eq!(options.len(), 1);
        assert_eq!(options.get("world"), Some("eldoria.json"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let options = OptionSet::parse(["--style", "apa", "--style", "mla"]);
        assert_eq!(options.get("style"), Some("mla"));
    }

    #[test]
    fn test_empty_input_and_bare_marker() {
        assert!(OptionSet::parse(Vec::<String>::new()).is_empty());
        let options = OptionSet::parse(["--"]);
        assert_eq!(options.get(""), Some("true"));
    }

    #[test]
    fn test_get_or_default() {
        let options = OptionSet::parse(["--depth", "light"]);
        assert_eq!(options.get_or("depth", "comprehensive"), "light");
        assert_eq!(options.get_or("profile", "default"), "default");
    }

    #[test]
    fn test_serializes_as_plain_object() -> Result<(), Box<dyn std::error::Error>> {
        let options = OptionSet::parse(["--style", "chicago"]);
        assert_eq!(serde_json::to_string(&options)?, r#"{"style":"chicago"}"#);
        Ok(())
    }

    fn token() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z]{0,6}",
            "--[a-z]{0,6}",
            Just("true".to_string()),
            Just("--".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn prop_keys_are_exactly_flag_tokens(tokens in proptest::collection::vec(token(), 0..12)) {
            let options = OptionSet::parse(&tokens);
            let keys: BTreeSet<&str> = options.iter().map(|(key, _)| key).collect();
            let expected: BTreeSet<&str> = tokens
                .iter()
                .filter_map(|token| token.strip_prefix("--"))
                .collect();
            prop_assert_eq!(keys, expected);
        }

        #[test]
        fn prop_flag_before_flag_is_true(a in "[a-z]{1,6}", b in "[a-z]{1,6}") {
            prop_assume!(a != b);
            let options = OptionSet::parse([format!("--{a}"), format!("--{b}")]);
            prop_assert_eq!(options.get(&a), Some("true"));
        }
    }
}
