//! monogen-core - Template substitution and code emission engine
//!
//! This crate generates concrete Rust source files from type-parameterized
//! templates, emulating generic programming at the source level: one
//! generated specialization per invocation.
//!
//! The pipeline:
//! - [`BuildContext`] supplies the owning package name and the source root;
//! - [`template`] loads the template, prepends the generated-file header,
//!   and expands the `{{T alias}}` / `{{Name alias}}` directives against
//!   the caller's [`AliasMap`];
//! - [`format`] pretty-prints the expansion, falling back to the raw text
//!   when it is not valid Rust;
//! - [`sink`] replaces the destination file with the result.
//!
//! [`Generator`] composes these into a single `generate()` call:
//!
//! ```no_run
//! use monogen_core::{BuildContext, Generator, TypeAssignments};
//!
//! let mut types = TypeAssignments::new();
//! types.insert("a".into(), "i64".into());
//!
//! let context = BuildContext::from_env()?;
//! let generator = Generator::new(context, types, "templates/convert_slice.trs", None);
//! generator.generate()?;
//! # Ok::<(), monogen_core::GenerateError>(())
//! ```

pub mod alias;
pub mod config;
pub mod destination;
pub mod error;
pub mod format;
pub mod generator;
pub mod sink;
pub mod template;

pub use alias::{AliasMap, TypeAssignments, parse_binding, parse_bindings};
pub use config::BuildContext;
pub use error::{GenerateError, GenerateResult};
pub use generator::Generator;
pub use template::Template;
