//! Generation orchestration.

use std::path::{Path, PathBuf};

use crate::alias::{AliasMap, TypeAssignments};
use crate::config::BuildContext;
use crate::destination;
use crate::error::GenerateResult;
use crate::format;
use crate::sink;
use crate::template::{self, Template};

/// A single generation task: one template, one set of type bindings, one
/// destination file.
///
/// The descriptor is immutable once constructed; the destination is
/// resolved in [`Generator::new`] and does not change afterwards. Each
/// value is meant for exactly one [`generate`](Generator::generate) call.
#[derive(Debug)]
pub struct Generator {
    context: BuildContext,
    aliases: AliasMap,
    source: PathBuf,
    destination: PathBuf,
}

impl Generator {
    /// Create a generation task.
    ///
    /// An explicit `destination` is used as given, with the `.rs`
    /// extension appended when absent. Without one, the destination name
    /// is derived from the template's base name and the sorted type
    /// bindings.
    pub fn new(
        context: BuildContext,
        types: TypeAssignments,
        source: impl Into<PathBuf>,
        destination: Option<String>,
    ) -> Self {
        let source = source.into();
        let destination = match destination.filter(|dest| !dest.is_empty()) {
            Some(dest) => PathBuf::from(destination::ensure_extension(&dest)),
            None => PathBuf::from(destination::destination_from_types(&source, &types)),
        };

        Self {
            context,
            aliases: AliasMap::new(types),
            source,
            destination,
        }
    }

    /// The resolved destination path.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Run the generation task.
    ///
    /// Load, parse, and execution failures abort before the destination is
    /// touched. A formatting failure does not: the unformatted expansion
    /// is still written, and the formatting error is returned afterwards.
    /// A non-`Ok` return therefore does not imply the destination file is
    /// absent — check [`GenerateError::is_degraded_output`] to tell the
    /// two outcomes apart.
    ///
    /// [`GenerateError::is_degraded_output`]: crate::GenerateError::is_degraded_output
    pub fn generate(&self) -> GenerateResult<()> {
        tracing::debug!(
            source = %self.source.display(),
            destination = %self.destination.display(),
            "loading template"
        );
        let text = template::load_template_source(&self.context, &self.source)?;

        let template = Template::parse(self.destination.display().to_string(), &text)?;
        let raw = template.execute(&self.aliases)?;

        let (code, format_err) = format::format_source(template.name(), &raw);
        if format_err.is_some() {
            tracing::warn!(
                template = template.name(),
                "generated code failed formatting; writing raw expansion"
            );
        }

        sink::write_output(&self.destination, code.as_bytes())?;
        tracing::info!(destination = %self.destination.display(), "wrote generated file");

        match format_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
