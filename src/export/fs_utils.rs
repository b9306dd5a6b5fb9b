//! Output-file guards shared by the export writers.

use std::path::Path;

use crate::errors::{AppError, AppResult};

/// Refuse to clobber an existing file unless `force` is set.
pub fn check_output_path(path: &str, force: bool) -> AppResult<()> {
    let p = Path::new(path);

    if p.exists() && !force {
        return Err(AppError::Export(format!(
            "file '{path}' already exists (use --force to overwrite)"
        )));
    }

    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(AppError::Export(format!(
                "directory '{}' does not exist",
                parent.display()
            )));
        }
    }

    Ok(())
}
