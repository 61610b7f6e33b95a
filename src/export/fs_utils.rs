use crate::errors::{AppError, AppResult};
use std::io;
use std::path::Path;

/// Refuse to overwrite an existing file unless `force` is set.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::from(io::Error::other(format!(
            "File already exists: {} (use --force to overwrite)",
            path.display()
        ))));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(AppError::from(io::Error::other(format!(
            "Directory does not exist: {}",
            parent.display()
        ))));
    }

    Ok(())
}
