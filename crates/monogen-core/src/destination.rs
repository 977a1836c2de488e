//! Destination file naming.
//!
//! When the caller supplies no destination, the output name is derived
//! from the template's base name and the type bindings. The derivation is
//! a pure function of the binding *set*, so re-ordered but identical
//! invocations name the same file and build scripts stay reproducible.

use std::path::Path;

use crate::alias::TypeAssignments;

/// Extension of generated files.
pub const GENERATED_EXTENSION: &str = "rs";

/// Derive a destination file name from the template path and bindings.
///
/// The name is `<stem>_<types>.rs`, where `<stem>` is the template's base
/// name without its extension and `<types>` concatenates the bound type
/// expressions. Pairs are sorted by their full `alias:type` string before
/// the type portions are joined, so ties on type are broken by alias.
///
/// ```
/// use monogen_core::TypeAssignments;
/// use monogen_core::destination::destination_from_types;
/// use std::path::Path;
///
/// let mut types = TypeAssignments::new();
/// types.insert("a".into(), "i64".into());
/// types.insert("b".into(), "f64".into());
///
/// let name = destination_from_types(Path::new("fooprocess.trs"), &types);
/// assert_eq!(name, "fooprocess_i64f64.rs");
/// ```
pub fn destination_from_types(source: &Path, types: &TypeAssignments) -> String {
    format!(
        "{}_{}.{}",
        source_section(source),
        types_section(types),
        GENERATED_EXTENSION
    )
}

/// Append the generated extension to an explicit destination when absent.
pub fn ensure_extension(destination: &str) -> String {
    let suffix = format!(".{GENERATED_EXTENSION}");
    if destination.ends_with(&suffix) {
        destination.to_owned()
    } else {
        format!("{destination}{suffix}")
    }
}

fn source_section(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn types_section(types: &TypeAssignments) -> String {
    let mut pairs: Vec<String> = types
        .iter()
        .map(|(alias, type_expr)| format!("{alias}:{type_expr}"))
        .collect();
    pairs.sort();

    pairs
        .iter()
        .map(|pair| pair.split_once(':').map(|(_, t)| t).unwrap_or_default())
        .collect()
}
