// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;

use std::fmt;
use std::str::FromStr;

/// The four key casings a converter can produce.
///
/// `Case` doubles as the converter lookup table: each variant selects one of
/// the `to_*_case` functions through [`Case::convert`]. The only way to
/// obtain a `Case` from an identifier string is [`FromStr`], which rejects
/// anything outside the set with [`Error::InvalidCase`], so a `Case` value
/// always designates a valid converter.
///
/// # Example
///
/// ```
/// use yaml_casing::Case;
///
/// let case: Case = "kebab".parse()?;
/// assert_eq!(case.convert("helloWorld"), "hello-world");
/// # Ok::<(), yaml_casing::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Camel,
    Snake,
    Kebab,
    Pascal,
}

impl Case {
    /// Converts a string with the converter this variant selects.
    ///
    /// # Example
    ///
    /// ```
    /// use yaml_casing::Case;
    ///
    /// assert_eq!(Case::Snake.convert("zipCode"), "zip_code");
    /// assert_eq!(Case::Pascal.convert("zip_code"), "ZipCode");
    /// ```
    pub fn convert(&self, s: &str) -> String {
        match self {
            Case::Camel => to_camel_case(s),
            Case::Snake => to_snake_case(s),
            Case::Kebab => to_kebab_case(s),
            Case::Pascal => to_pascal_case(s),
        }
    }
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camel" => Ok(Case::Camel),
            "snake" => Ok(Case::Snake),
            "kebab" => Ok(Case::Kebab),
            "pascal" => Ok(Case::Pascal),
            _ => Err(Error::InvalidCase(s.to_owned())),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Camel => f.write_str("camel"),
            Case::Snake => f.write_str("snake"),
            Case::Kebab => f.write_str("kebab"),
            Case::Pascal => f.write_str("pascal"),
        }
    }
}

/// Converts a string to camelCase.
///
/// Every hyphen, underscore or space immediately followed by a word
/// character (ASCII alphanumeric or `_`) is folded into that character
/// upper-cased, and the first character of the result is then forced to
/// lower case. Everything else is kept verbatim: conversion works on the
/// raw character sequence, not on detected words, so `"XMLParser"` becomes
/// `"xMLParser"` and a delimiter with nothing foldable after it stays
/// (`"a--b"` becomes `"a-B"`).
///
/// # Example
///
/// ```
/// assert_eq!(yaml_casing::to_camel_case("hello_world"), "helloWorld");
/// assert_eq!(yaml_casing::to_camel_case("Hello World"), "helloWorld");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if matches!(c, '-' | '_' | ' ') {
            if let Some(&next) = chars.peek() {
                if is_word_char(next) {
                    chars.next();
                    folded.extend(next.to_uppercase());
                    continue;
                }
            }
        }
        folded.push(c);
    }
    lowercase_first(folded)
}

/// Converts a string to snake_case.
///
/// An underscore is inserted before every ASCII upper-case letter (which is
/// lower-cased), runs of hyphens and spaces collapse into a single
/// underscore, and one leading underscore is stripped if present.
///
/// # Example
///
/// ```
/// assert_eq!(yaml_casing::to_snake_case("helloWorld"), "hello_world");
/// assert_eq!(yaml_casing::to_snake_case("hello-world"), "hello_world");
/// ```
pub fn to_snake_case(s: &str) -> String {
    separate_words(s, '_', ['-', ' '])
}

/// Converts a string to kebab-case.
///
/// The mirror of [`to_snake_case`]: a hyphen before every ASCII upper-case
/// letter, runs of underscores and spaces collapsed into a single hyphen,
/// one leading hyphen stripped.
///
/// # Example
///
/// ```
/// assert_eq!(yaml_casing::to_kebab_case("helloWorld"), "hello-world");
/// assert_eq!(yaml_casing::to_kebab_case("hello_world"), "hello-world");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    separate_words(s, '-', ['_', ' '])
}

/// Converts a string to PascalCase.
///
/// Computes the camelCase form and upper-cases its first character.
///
/// # Example
///
/// ```
/// assert_eq!(yaml_casing::to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(yaml_casing::to_pascal_case("hello world"), "HelloWorld");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    uppercase_first(to_camel_case(s))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Shared body of [`to_snake_case`] and [`to_kebab_case`]: `sep` before
/// each capital, runs of `collapse` characters reduced to one `sep`, one
/// leading `sep` stripped.
fn separate_words(s: &str, sep: char, collapse: [char; 2]) -> String {
    let mut out =
        String::with_capacity(s.len() + s.chars().filter(|c| c.is_ascii_uppercase()).count());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_uppercase() {
            out.push(sep);
            out.push(c.to_ascii_lowercase());
        } else if collapse.contains(&c) {
            while chars.peek().is_some_and(|n| collapse.contains(n)) {
                chars.next();
            }
            out.push(sep);
        } else {
            out.push(c);
        }
    }
    if out.starts_with(sep) {
        out.remove(0);
    }
    out
}

fn lowercase_first(s: String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if !first.is_lowercase() => {
            let mut out: String = first.to_lowercase().collect();
            out.push_str(chars.as_str());
            out
        }
        _ => s,
    }
}

fn uppercase_first(s: String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            out
        }
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn camel() {
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("hello-world"), "helloWorld");
        assert_eq!(to_camel_case("Hello World"), "helloWorld");
        assert_eq!(to_camel_case("helloWorld"), "helloWorld");
        assert_eq!(to_camel_case("_private"), "private");
    }

    #[test]
    fn snake() {
        assert_eq!(to_snake_case("helloWorld"), "hello_world");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("hello world"), "hello_world");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
    }

    #[test]
    fn kebab() {
        assert_eq!(to_kebab_case("helloWorld"), "hello-world");
        assert_eq!(to_kebab_case("hello_world"), "hello-world");
        assert_eq!(to_kebab_case("hello world"), "hello-world");
        assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
    }

    #[test]
    fn pascal() {
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("hello world"), "HelloWorld");
        assert_eq!(to_pascal_case("HelloWorld"), "HelloWorld");
        assert_eq!(to_pascal_case("a_b"), "AB");
    }

    #[test]
    fn idempotent() {
        for s in ["hello_world", "Hello World", "helloWorld", "hello-world"] {
            let once = to_camel_case(s);
            assert_eq!(to_camel_case(&once), once);
            let once = to_snake_case(s);
            assert_eq!(to_snake_case(&once), once);
            let once = to_kebab_case(s);
            assert_eq!(to_kebab_case(&once), once);
            let once = to_pascal_case(s);
            assert_eq!(to_pascal_case(&once), once);
        }
    }

    #[test]
    fn raw_character_sequence() {
        // No word detection: acronym runs explode and do not round-trip.
        assert_eq!(to_snake_case("XMLParser"), "x_m_l_parser");
        assert_eq!(to_camel_case("XMLParser"), "xMLParser");
        assert_ne!(to_camel_case(&to_snake_case("XMLParser")), "XMLParser");
        // A delimiter with no word character after it is kept verbatim.
        assert_eq!(to_camel_case("a--b"), "a-B");
        // The underscore itself counts as a word character for the fold.
        assert_eq!(to_camel_case("a__b"), "a_b");
        // A capital and an adjacent space each produce their own separator.
        assert_eq!(to_snake_case("Hello World"), "hello__world");
        assert_eq!(to_kebab_case("Hello World"), "hello--world");
    }

    #[test]
    fn empty_and_caseless() {
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_snake_case(""), "");
        assert_eq!(to_kebab_case(""), "");
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_camel_case("1234"), "1234");
        assert_eq!(to_snake_case("v1.2"), "v1.2");
    }

    #[test]
    fn parse_and_display() {
        for (s, case) in [
            ("camel", Case::Camel),
            ("snake", Case::Snake),
            ("kebab", Case::Kebab),
            ("pascal", Case::Pascal),
        ] {
            assert_eq!(s.parse::<Case>().unwrap(), case);
            assert_eq!(case.to_string(), s);
        }
    }

    #[test]
    fn parse_rejects_unknown_identifier() {
        let err = "upper".parse::<Case>().unwrap_err();
        assert!(matches!(err, Error::InvalidCase(_)));
        let msg = err.to_string();
        assert!(msg.contains("upper"));
        assert!(msg.contains("camel, snake, kebab, pascal"));
        // Identifiers are matched exactly, lower-case only.
        assert!("Camel".parse::<Case>().is_err());
    }
}
