//! Alias-to-type bindings and identifier derivation.
//!
//! Templates refer to concrete types through short aliases (`a`, `elem`,
//! ...). The caller binds each alias to a concrete Rust type expression,
//! and the [`AliasMap`] resolves the two forms a template can ask for: the
//! type expression itself, and an identifier-safe name derived from it.

use std::collections::BTreeMap;

use crate::error::{GenerateError, GenerateResult};

/// Caller-supplied mapping from alias to concrete type expression.
pub type TypeAssignments = BTreeMap<String, String>;

/// Resolves aliases to their bound types and derived identifiers.
///
/// Both lookups are pure; the map is never mutated after construction.
#[derive(Debug, Clone)]
pub struct AliasMap {
    bindings: TypeAssignments,
}

impl AliasMap {
    /// Create a map over the given bindings.
    pub fn new(bindings: TypeAssignments) -> Self {
        Self { bindings }
    }

    /// The concrete type expression bound to `alias`.
    pub fn type_of(&self, alias: &str) -> GenerateResult<&str> {
        self.bindings
            .get(alias)
            .map(String::as_str)
            .ok_or_else(|| GenerateError::UnknownAlias(alias.to_owned()))
    }

    /// An identifier fragment derived from the type bound to `alias`.
    ///
    /// The bound type expression is rewritten in a fixed order: vector and
    /// slice markers become `List`, the reference marker becomes the
    /// `PtrTo` prefix, and the remaining bracket characters are stripped.
    /// The order matters so that a slice-of-reference type yields one
    /// coherent name:
    ///
    /// ```
    /// use monogen_core::{AliasMap, TypeAssignments};
    ///
    /// let mut types = TypeAssignments::new();
    /// types.insert("a".into(), "Vec<&Foo>".into());
    /// let aliases = AliasMap::new(types);
    ///
    /// assert_eq!(aliases.identifier("a").unwrap(), "ListPtrToFoo");
    /// ```
    pub fn identifier(&self, alias: &str) -> GenerateResult<String> {
        self.type_of(alias).map(derive_identifier)
    }
}

/// Rewrite a type expression into an identifier fragment.
fn derive_identifier(type_expr: &str) -> String {
    let mut name = type_expr.replace("Vec<", "List");
    name = name.replace('[', "List");
    name = name.replace('&', "PtrTo");
    name.retain(|c| !matches!(c, '<' | '>' | ']' | ' '));

    name
}

/// Parse a single `alias:type` binding.
///
/// The split happens on the first colon only, so type expressions
/// containing path separators survive: `m:std::vec::Vec<u8>` binds `m` to
/// `std::vec::Vec<u8>`.
pub fn parse_binding(binding: &str) -> GenerateResult<(String, String)> {
    let invalid = || GenerateError::InvalidBinding(binding.to_owned());

    let (alias, type_expr) = binding.split_once(':').ok_or_else(invalid)?;
    if alias.is_empty() || type_expr.is_empty() {
        return Err(invalid());
    }

    Ok((alias.to_owned(), type_expr.to_owned()))
}

/// Parse a list of `alias:type` bindings into [`TypeAssignments`].
///
/// A repeated alias keeps the last binding.
pub fn parse_bindings(bindings: &[String]) -> GenerateResult<TypeAssignments> {
    let mut types = TypeAssignments::new();
    for binding in bindings {
        let (alias, type_expr) = parse_binding(binding)?;
        types.insert(alias, type_expr);
    }

    Ok(types)
}

#[cfg(test)]
#[path = "alias/alias_tests.rs"]
mod alias_tests;
