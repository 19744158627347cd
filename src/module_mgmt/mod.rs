//! Layout of a generated transAPI module directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod templates;

/// Create `<output_dir>/<module_name>` if it does not exist yet.
pub fn create_module_dir(output_dir: &Path, module_name: &str) -> Result<PathBuf> {
    let dir = output_dir.join(module_name);
    fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create module directory {}", dir.display()))?;
    log::debug!("Module directory: {}", dir.display());
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_dir_is_created_once() {
        let tempdir = tempfile::tempdir().unwrap();
        let dir = create_module_dir(tempdir.path(), "toaster").unwrap();
        assert!(dir.is_dir());
        assert_eq!(create_module_dir(tempdir.path(), "toaster").unwrap(), dir);
    }
}
