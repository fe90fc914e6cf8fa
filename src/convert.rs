// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::case::Case;
use crate::error::Result;

use serde_yaml::{Mapping, Value};

/// Converts every key of a YAML mapping, at every depth, to a chosen casing.
///
/// E.g. converting to camelCase,
///
/// ```yaml
/// user_name: ada
/// home_address:
///     zip_code: "75000"
/// ```
///
/// becomes
///
/// ```yaml
/// userName: ada
/// homeAddress:
///     zipCode: "75000"
/// ```
///
/// Sequences keep their length and order, each element converted
/// independently. Values that are neither mappings nor sequences pass
/// through untouched; that includes tagged values (`!Timestamp ...`), which
/// are opaque leaves down to their payload. Keys that are not strings are
/// carried over as they are.
///
/// # Example
///
/// ```
/// use yaml_casing::{Case, KeyConverter};
///
/// let expected: serde_yaml::Value = serde_yaml::from_str("zipCode: \"75000\"")?;
/// let actual = KeyConverter::new(Case::Camel)
///     .apply_str("zip_code: \"75000\"")?;
/// assert_eq!(actual, expected);
/// # Ok::<(), yaml_casing::Error>(())
/// ```
///
/// This struct mainly stores the options so they are easier to set than
/// extra arguments on a single function
pub struct KeyConverter<'k> {
    case: Case,
    recursive: bool,
    ignore: Vec<&'k str>,
}

impl<'k> KeyConverter<'k> {
    /// Creates a new KeyConverter with default values
    pub fn new(case: Case) -> Self {
        KeyConverter {
            case,
            recursive: true,
            ignore: vec![],
        }
    }

    /// Set to `false` to only convert the keys of a top-level mapping,
    /// leaving its values (and any non-mapping input) untouched. Default is
    /// `true`: conversion descends into every nested mapping and sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use yaml_casing::{Case, KeyConverter};
    ///
    /// let converter = KeyConverter::new(Case::Snake)
    ///     .recursive(false);
    /// ```
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Add keys that should keep their spelling.
    ///
    /// A key equal to one of the given strings is carried over unchanged;
    /// its value is still converted. Useful when a consumer expects one
    /// specific key verbatim while the rest of the document is renamed.
    ///
    /// # Example
    ///
    /// ```
    /// use yaml_casing::{Case, KeyConverter};
    ///
    /// let e = r#"
    /// created_at: 2024-05-01
    /// someField: 42
    /// "#;
    ///
    /// let s = r#"
    /// created_at: 2024-05-01
    /// some_field: 42
    /// "#;
    ///
    /// let expected: serde_yaml::Value = serde_yaml::from_str(e)?;
    /// let actual = KeyConverter::new(Case::Camel)
    ///     .ignore(vec!["created_at"])
    ///     .apply_str(s)?;
    /// assert_eq!(actual, expected);
    /// # Ok::<(), yaml_casing::Error>(())
    /// ```
    pub fn ignore(mut self, ignore: Vec<&'k str>) -> Self {
        self.ignore = ignore;
        self
    }

    /// Converts the keys of `value` and returns the rebuilt value.
    ///
    /// The input is consumed: containers are rebuilt, leaf values are moved
    /// into the result as they are. Two keys converting to the same string
    /// collapse into a single entry and the last one enumerated keeps its
    /// value.
    ///
    /// # Example
    ///
    /// ```
    /// use yaml_casing::{Case, KeyConverter};
    ///
    /// let value: serde_yaml::Value = serde_yaml::from_str("first_name: Ada")?;
    /// let converted = KeyConverter::new(Case::Kebab).convert(value);
    ///
    /// let expected: serde_yaml::Value = serde_yaml::from_str("first-name: Ada")?;
    /// assert_eq!(converted, expected);
    /// # Ok::<(), yaml_casing::Error>(())
    /// ```
    pub fn convert(&self, value: Value) -> Value {
        match value {
            Value::Mapping(m) => Value::Mapping(self.convert_mapping(m)),
            Value::Sequence(seq) if self.recursive => {
                Value::Sequence(seq.into_iter().map(|v| self.convert(v)).collect())
            }
            other => other,
        }
    }

    /// In-place variant of [`convert`](KeyConverter::convert).
    ///
    /// # Example
    ///
    /// ```
    /// use yaml_casing::{Case, KeyConverter};
    ///
    /// let mut value: serde_yaml::Value = serde_yaml::from_str("first_name: Ada")?;
    /// KeyConverter::new(Case::Pascal).apply_to_value(&mut value);
    ///
    /// let expected: serde_yaml::Value = serde_yaml::from_str("FirstName: Ada")?;
    /// assert_eq!(value, expected);
    /// # Ok::<(), yaml_casing::Error>(())
    /// ```
    pub fn apply_to_value(&self, value: &mut Value) {
        let owned = std::mem::take(value);
        *value = self.convert(owned);
    }

    /// Deserializes a YAML string, then converts the keys of the resulting
    /// value.
    ///
    /// # Example
    ///
    /// ```
    /// use yaml_casing::{Case, KeyConverter};
    ///
    /// let value = KeyConverter::new(Case::Snake)
    ///     .apply_str("zipCode: \"75000\"")?;
    ///
    /// assert_eq!(value.get("zip_code").and_then(|v| v.as_str()), Some("75000"));
    /// # Ok::<(), yaml_casing::Error>(())
    /// ```
    pub fn apply_str(&self, s: &str) -> Result<Value> {
        let value = serde_yaml::from_str(s)?;
        Ok(self.convert(value))
    }

    /// Rebuilds a mapping entry by entry, in enumeration order, converting
    /// each string key that is not in the ignore list.
    fn convert_mapping(&self, m: Mapping) -> Mapping {
        let mut out = Mapping::with_capacity(m.len());
        for (key, val) in m {
            let key = match key {
                Value::String(s) if !self.ignore.contains(&s.as_str()) => {
                    Value::String(self.case.convert(&s))
                }
                other => other,
            };
            let val = if self.recursive { self.convert(val) } else { val };
            out.insert(key, val);
        }
        out
    }
}

/// Converts every mapping key in `value` to `case`, recursively.
///
/// Shorthand for [`KeyConverter::new`] followed by
/// [`convert`](KeyConverter::convert), for the common case where no option
/// needs to be set.
///
/// # Example
///
/// ```
/// use yaml_casing::{convert_keys, Case};
///
/// let value: serde_yaml::Value = serde_yaml::from_str(r#"
/// user_name: ada
/// labels:
///     - a_b: 1
/// "#)?;
///
/// let expected: serde_yaml::Value = serde_yaml::from_str(r#"
/// userName: ada
/// labels:
///     - aB: 1
/// "#)?;
///
/// assert_eq!(convert_keys(value, Case::Camel), expected);
/// # Ok::<(), yaml_casing::Error>(())
/// ```
pub fn convert_keys(value: Value, case: Case) -> Value {
    KeyConverter::new(case).convert(value)
}
