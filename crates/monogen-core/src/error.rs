//! Error types for code generation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations.
///
/// Every variant except [`GenerateError::Format`] is fatal: generation
/// aborts and no destination file is produced. A `Format` error means the
/// expanded code failed canonical formatting but was still written to the
/// destination unformatted, so the template author can inspect it.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The build context carries no package name.
    #[error("no package name available; expected {} in the build environment", crate::config::PACKAGE_ENV)]
    MissingPackageName,

    /// The template source file could not be read.
    #[error("failed to read template {}: {}", .path.display(), .source)]
    SourceRead { path: PathBuf, source: io::Error },

    /// The template text is malformed.
    #[error("syntax error in template '{template}' at line {line}: {message}")]
    TemplateSyntax {
        template: String,
        line: usize,
        message: String,
    },

    /// An alias has no type bound to it.
    #[error("unknown alias '{0}'")]
    UnknownAlias(String),

    /// A template function call failed during execution.
    #[error("execution of template '{template}' failed at line {line}: {source}")]
    TemplateExecution {
        template: String,
        line: usize,
        source: Box<GenerateError>,
    },

    /// The expanded code is not valid Rust. The destination file was still
    /// written with the unformatted text.
    #[error("invalid code in template '{template}': {message}")]
    Format { template: String, message: String },

    /// A pre-existing destination file could not be removed.
    #[error("failed to remove existing destination {}: {}", .path.display(), .source)]
    DestinationCleanup { path: PathBuf, source: io::Error },

    /// The destination file could not be written.
    #[error("failed to write destination {}: {}", .path.display(), .source)]
    FileWrite { path: PathBuf, source: io::Error },

    /// A command-line type binding is not of the form `alias:type`.
    #[error("invalid type binding '{0}': expected 'alias:type'")]
    InvalidBinding(String),
}

impl GenerateError {
    /// True when the destination file was written despite the error.
    ///
    /// Callers must treat such an error as "output was produced but may be
    /// malformed", not as "no output was produced".
    pub fn is_degraded_output(&self) -> bool {
        matches!(self, GenerateError::Format { .. })
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
