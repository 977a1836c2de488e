//! Build-context configuration.
//!
//! Generation needs two values from the invoking build environment: the
//! name of the package the generated code belongs to, and the root against
//! which relative template paths are resolved. Both are captured once into
//! a [`BuildContext`] at the edge of the program and passed in explicitly;
//! the library itself never reads the process environment.

use std::env;
use std::path::PathBuf;

use crate::error::{GenerateError, GenerateResult};

/// Environment variable supplying the package name.
///
/// Cargo sets this for a consuming crate's build script, which is the
/// intended way to drive generation.
pub const PACKAGE_ENV: &str = "CARGO_PKG_NAME";

/// Environment variable supplying the source root.
pub const SOURCE_ROOT_ENV: &str = "CARGO_MANIFEST_DIR";

/// Build context consumed read-only by a [`Generator`](crate::Generator).
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Name of the package the generated file belongs to.
    pub package_name: String,

    /// Root directory relative template paths are resolved against.
    pub source_root: PathBuf,
}

impl BuildContext {
    /// Create a context from explicit values.
    pub fn new(package_name: impl Into<String>, source_root: impl Into<PathBuf>) -> Self {
        Self {
            package_name: package_name.into(),
            source_root: source_root.into(),
        }
    }

    /// Capture the context from the Cargo build-script environment.
    ///
    /// Fails with [`GenerateError::MissingPackageName`] when the package
    /// variable is unset or empty. A missing source root falls back to the
    /// current directory.
    pub fn from_env() -> GenerateResult<Self> {
        let package_name = env::var(PACKAGE_ENV)
            .ok()
            .filter(|name| !name.is_empty())
            .ok_or(GenerateError::MissingPackageName)?;

        let source_root = env::var_os(SOURCE_ROOT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            package_name,
            source_root,
        })
    }
}
