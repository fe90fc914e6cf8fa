// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.


//! Case conversion for strings and YAML mapping keys.
//!
//! # Converting keys
//!
//! APIs tend to disagree on key casing: a payload produced by a snake_case
//! backend often has to reach a camelCase consumer. The [`KeyConverter`]
//! methods (and the [`convert_keys`] shorthand) rewrite every mapping key
//! of a YAML representation, at every depth, so that:
//!
//! ```yaml
//! user_name: ada
//! home_address:
//!     zip_code: "75000"
//! ```
//!
//! becomes:
//!
//! ```yaml
//! userName: ada
//! homeAddress:
//!     zipCode: "75000"
//! ```
//!
//! ```
//!         let s1 = r#"
//! user_name: ada
//! home_address:
//!     zip_code: "75000"
//! "#;
//!
//!         let s2 = r#"
//! userName: ada
//! homeAddress:
//!     zipCode: "75000"
//! "#;
//!         let v2: serde_yaml::Value = serde_yaml::from_str(s2)?;
//!         let v1 = yaml_casing::KeyConverter::new(yaml_casing::Case::Camel)
//!             .apply_str(s1)?;
//!         assert_eq!(v1, v2);
//! # Ok::<(), yaml_casing::Error>(())
//! ```
//!
//! Only the key strings change: sequence order and length, nesting depth
//! and every leaf value come out exactly as they went in.
//!
//! # Converting strings
//!
//! The four converters are also exposed directly:
//!
//! ```
//! assert_eq!(yaml_casing::to_snake_case("helloWorld"), "hello_world");
//! assert_eq!(yaml_casing::to_kebab_case("helloWorld"), "hello-world");
//! assert_eq!(yaml_casing::to_pascal_case("hello_world"), "HelloWorld");
//! assert_eq!(yaml_casing::to_camel_case("Hello World"), "helloWorld");
//! ```
//!
//! Conversion works on the raw character sequence; there is no acronym
//! detection (`"XMLParser"` converts to `"x_m_l_parser"`).


mod case;
mod convert;
mod error;

pub use case::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, Case};
pub use convert::{convert_keys, KeyConverter};
pub use error::{Error, Result};
