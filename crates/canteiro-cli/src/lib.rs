//! # canteiro-cli — Command-Line Front End
//!
//! Exposes the mask and validator engines of `canteiro-core` to shell
//! scripts and data-cleaning jobs, e.g. normalizing a spreadsheet of
//! suppliers before importing it into the registry.
//!
//! ## Subcommands
//!
//! - `canteiro mask` — format a value for display.
//! - `canteiro unmask` — strip a value to digits.
//! - `canteiro validate` — check one value against a mask kind.
//! - `canteiro message` — print the message for a failure reason.
//! - `canteiro check` — check a whole record against a YAML form definition.
//!
//! ```bash
//! canteiro mask --kind documento 11222333000181
//! canteiro validate --kind cpf 111.444.777-35
//! canteiro check forms/fornecedor.yaml fornecedor.json --json
//! ```
//!
//! Handlers write to the supplied writer and return the process exit code:
//! 0 on success, 1 when a value fails validation. Operational errors
//! (unreadable files, bad YAML) propagate as `anyhow::Error` and the
//! binary maps them to 2.

pub mod check;
pub mod format;

use std::path::{Path, PathBuf};

/// Exit code for a value or record that failed validation.
pub const EXIT_INVALID: u8 = 1;

/// Exit code for an operational error.
pub const EXIT_ERROR: u8 = 2;

/// Resolve a path that may be relative to a base directory.
///
/// Absolute paths are returned as-is. A relative path that exists under
/// `base` resolves there; otherwise it is left relative to the current
/// directory.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let based = base.join(path);
    if based.exists() {
        based
    } else {
        path.to_path_buf()
    }
}
