//! Canonical formatting of generated source text.
//!
//! Formatting goes through `syn` + `prettyplease` rather than an external
//! `rustfmt` binary, so it works wherever the generator runs, including
//! from build scripts.

use crate::error::GenerateError;

/// Format expanded source text canonically.
///
/// Always returns usable text: on success, the prettyplease-formatted
/// source; on failure, the input *unchanged* alongside a
/// [`GenerateError::Format`] describing why the text is not valid Rust.
/// The caller is expected to write the returned text either way, so a
/// broken template leaves an inspectable artifact behind.
pub fn format_source(template_name: &str, raw: &str) -> (String, Option<GenerateError>) {
    match syn::parse_file(raw) {
        Ok(file) => (prettyplease::unparse(&file), None),
        Err(e) => (
            raw.to_owned(),
            Some(GenerateError::Format {
                template: template_name.to_owned(),
                message: e.to_string(),
            }),
        ),
    }
}
