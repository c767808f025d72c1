//! Turning arbitrary text into identifiers.
//!
//! Property keys and file names are split into words at separators and at
//! lower-to-upper case changes, and the words are recombined into the naming
//! conventions the generated sources use:
//!
//! ```rust
//! use propconst::names::key_to_names;
//!
//! let names = key_to_names("test.HTTP.request");
//! assert_eq!(names.constant_name, "TEST_HTTP_REQUEST");
//! assert_eq!(names.variable_name, "testHttpRequest");
//! assert_eq!(names.getter_name, "getTestHttpRequest");
//! assert_eq!(names.type_name, "TestHttpRequest");
//! ```

use serde::Serialize;

const DIV: char = '_';

/// Reserved words of the generated language. None of them may be used as a
/// package segment or as a type suffix.
pub const JAVA_KEYWORDS: &[&str] = &[
    "_",
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// A character allowed as the first character of a generated name.
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == DIV
}

/// A character allowed anywhere in a generated name.
pub fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == DIV || c == '$'
}

pub fn is_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Whether `name` can be used verbatim as a single identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => {
            chars.all(is_identifier_part) && !is_keyword(name)
        }
        _ => false,
    }
}

/// Whether `name` is a dot-separated sequence of valid identifiers.
pub fn is_valid_namespace(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_valid_identifier)
}

/// Makes a single namespace segment (e.g. a directory name) identifier-safe.
///
/// Invalid characters after the first one are dropped. The result always
/// satisfies [`is_valid_identifier`].
pub fn sanitize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    let mut out = String::with_capacity(segment.len() + 1);
    match chars.next() {
        Some(c) if is_identifier_start(c) => out.push(c),
        Some(c) if is_identifier_part(c) => {
            out.push(DIV);
            out.push(c);
        }
        _ => out.push(DIV),
    }
    out.extend(chars.filter(|c| is_identifier_part(*c)));
    if is_keyword(&out) {
        out.insert(0, DIV);
    }
    out
}

/// Splits `raw` into words.
///
/// Words end at underscores and at any character that cannot be part of an
/// identifier (both are dropped), and before an upper-case character that
/// follows a non-upper-case one. The casing inside each word is preserved.
///
/// The result is never empty: input without a single word character yields
/// one placeholder word made of as many underscores as `raw` has characters
/// (at least one).
pub fn split_words(raw: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut last_is_lower = false;

    for c in raw.chars() {
        if c != DIV && is_identifier_part(c) {
            let is_upper = c.is_uppercase();
            if last_is_lower && is_upper && !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            word.push(c);
            last_is_lower = !is_upper;
        } else {
            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            last_is_lower = false;
        }
    }
    if !word.is_empty() {
        words.push(word);
    }

    if words.is_empty() {
        let len = raw.chars().count().max(1);
        words.push(DIV.to_string().repeat(len));
    }
    words
}

/// The names derived from one word sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSet {
    /// `UPPER_SNAKE` constant name.
    pub constant_name: String,
    /// `lowerCamel` variable name.
    pub variable_name: String,
    /// `getUpperCamel` accessor name.
    pub getter_name: String,
    /// `UpperCamel` type name.
    pub type_name: String,
}

/// Combines words into a [`NameSet`].
///
/// Every word after the first character is lower-cased in the camel-case
/// names, so `HTTP` becomes `Http` there while the constant name keeps
/// `HTTP`.
pub fn synthesize<S: AsRef<str>>(words: &[S]) -> NameSet {
    let camel: String = words.iter().map(|w| capitalize(w.as_ref())).collect();
    let joined = words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<&str>>()
        .join("_");

    NameSet {
        constant_name: guard_start(joined.to_uppercase()),
        variable_name: guard_start(lower_first(&camel)),
        getter_name: format!("get{camel}"),
        type_name: guard_start(camel),
    }
}

/// Shorthand for `synthesize(&split_words(raw))`.
pub fn key_to_names(raw: &str) -> NameSet {
    synthesize(&split_words(raw))
}

/// The `UpperCamel` type name for `raw`.
pub fn type_name(raw: &str) -> String {
    key_to_names(raw).type_name
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn guard_start(name: String) -> String {
    if name.chars().next().is_some_and(is_identifier_start) {
        name
    } else {
        format!("{DIV}{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_camel_hump() {
        assert_eq!(split_words("testCase"), vec!["test", "Case"]);
        assert_eq!(split_words("key1Value"), vec!["key1", "Value"]);
    }

    #[test]
    fn test_split_drops_separators() {
        assert_eq!(split_words("test..Case"), vec!["test", "Case"]);
        assert_eq!(split_words("__test_case__"), vec!["test", "case"]);
        assert_eq!(split_words("info@example.nix"), vec!["info", "example", "nix"]);
        assert_eq!(split_words("   test    Case   "), vec!["test", "Case"]);
    }

    #[test]
    fn test_split_keeps_acronyms_together() {
        assert_eq!(split_words("test.HTTP.request"), vec!["test", "HTTP", "request"]);
        assert_eq!(split_words("HTTPRequest"), vec!["HTTPRequest"]);
    }

    #[test]
    fn test_split_all_separators_gives_placeholder() {
        assert_eq!(split_words("..."), vec!["___"]);
        assert_eq!(split_words("%%%"), vec!["___"]);
        assert_eq!(split_words("_"), vec!["_"]);
        assert_eq!(split_words(""), vec!["_"]);
    }

    #[test]
    fn test_key_to_names_table() {
        let cases = [
            ("test_case", "TEST_CASE", "testCase", "getTestCase"),
            ("test.case", "TEST_CASE", "testCase", "getTestCase"),
            ("test..Case", "TEST_CASE", "testCase", "getTestCase"),
            ("test%.%case", "TEST_CASE", "testCase", "getTestCase"),
            ("%%test_case%%", "TEST_CASE", "testCase", "getTestCase"),
            ("testCase", "TEST_CASE", "testCase", "getTestCase"),
            ("test$case", "TEST$CASE", "test$case", "getTest$case"),
            ("%test", "TEST", "test", "getTest"),
            ("0test", "_0TEST", "_0test", "get0test"),
            (
                "test.HTTP.request",
                "TEST_HTTP_REQUEST",
                "testHttpRequest",
                "getTestHttpRequest",
            ),
            ("...", "___", "___", "get___"),
            ("X", "X", "x", "getX"),
            ("x", "X", "x", "getX"),
            (
                "info@example.nix",
                "INFO_EXAMPLE_NIX",
                "infoExampleNix",
                "getInfoExampleNix",
            ),
        ];

        for (key, constant, variable, getter) in cases {
            let names = key_to_names(key);
            assert_eq!(names.constant_name, constant, "constant for {key:?}");
            assert_eq!(names.variable_name, variable, "variable for {key:?}");
            assert_eq!(names.getter_name, getter, "getter for {key:?}");
        }
    }

    #[test]
    fn test_unicode_upper_casing() {
        assert_eq!(key_to_names("ÄÖÜ_äöüß").constant_name, "ÄÖÜ_ÄÖÜSS");
    }

    #[test]
    fn test_type_name() {
        let cases = [
            ("t", "T"),
            ("test", "Test"),
            ("%.%test", "Test"),
            ("%%%test%%%", "Test"),
            ("0test", "_0test"),
            ("test_case", "TestCase"),
            ("test-case", "TestCase"),
            ("test.case.result", "TestCaseResult"),
            ("h.t.t.p", "HTTP"),
            ("info@example.nix", "InfoExampleNix"),
            ("...", "___"),
        ];
        for (raw, expected) in cases {
            assert_eq!(type_name(raw), expected, "type name for {raw:?}");
        }
    }

    #[test]
    fn test_valid_identifier() {
        assert!(is_valid_identifier("pkg"));
        assert!(is_valid_identifier("_0"));
        assert!(is_valid_identifier("a$b"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("0a"));
        assert!(!is_valid_identifier("a-b"));
        assert!(!is_valid_identifier("class"));
    }

    #[test]
    fn test_valid_namespace() {
        assert!(is_valid_namespace("de.tester.constants"));
        assert!(!is_valid_namespace(""));
        assert!(!is_valid_namespace("de..tester"));
        assert!(!is_valid_namespace("de.tester."));
        assert!(!is_valid_namespace("de.new.pkg"));
    }

    #[test]
    fn test_sanitize_segment() {
        assert_eq!(sanitize_segment("my-dir"), "mydir");
        assert_eq!(sanitize_segment("0dir"), "_0dir");
        assert_eq!(sanitize_segment("-dir"), "_dir");
        assert_eq!(sanitize_segment("class"), "_class");
        assert_eq!(sanitize_segment("_"), "__");
        for raw in ["my-dir", "0dir", "-", "class", "_", "a b c"] {
            assert!(is_valid_identifier(&sanitize_segment(raw)), "{raw:?}");
        }
    }
}
