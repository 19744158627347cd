//! autotools build templates copied into every module directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::constants::{defaults, files};
use crate::helpers::base_path;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template directory not found. Use --template-dir parameter to specify its location.")]
    NotFound,
}

/// Resolve the template directory.
///
/// An explicit directory (command line, then environment) is used as is.
/// Otherwise the well-known locations are searched for one holding every
/// template file.
pub fn find_templates(explicit: Option<&Path>) -> Result<PathBuf, TemplateError> {
    if let Some(dir) = explicit.or(base_path::TEMPLATE_DIR.as_deref()) {
        return Ok(dir.to_path_buf());
    }
    search_templates(defaults::TEMPLATE_SEARCH_DIRS.iter().map(Path::new))
}

fn search_templates<'a>(
    candidates: impl IntoIterator<Item = &'a Path>,
) -> Result<PathBuf, TemplateError> {
    candidates
        .into_iter()
        .find(|dir| is_template_dir(dir))
        .map(|dir| {
            log::debug!("Using templates from {}", dir.display());
            dir.to_path_buf()
        })
        .ok_or(TemplateError::NotFound)
}

pub fn is_template_dir(dir: &Path) -> bool {
    dir.is_dir() && files::TEMPLATE_FILES.iter().all(|f| dir.join(f).exists())
}

/// Write `configure.in` into `target_dir` with the project name filled in.
pub fn generate_configure_in(template_dir: &Path, target_dir: &Path, module_name: &str) -> Result<()> {
    let source = template_dir.join(files::CONFIGURE_IN);
    let target = target_dir.join(files::CONFIGURE_IN);

    let template = fs::read_to_string(&source)
        .with_context(|| format!("cannot read template {}", source.display()))?;
    let configure_in = template.replace(files::PROJECT_NAME_PLACEHOLDER, module_name);
    fs::write(&target, configure_in)
        .with_context(|| format!("cannot write {}", target.display()))?;
    Ok(())
}

pub fn copy_template_files(template_dir: &Path, target_dir: &Path) -> Result<()> {
    for name in files::TEMPLATE_FILES {
        let source = template_dir.join(name);
        let target = target_dir.join(name);
        fs::copy(&source, &target).with_context(|| {
            format!("cannot copy {} to {}", source.display(), target.display())
        })?;
    }
    log::info!(
        "Copied {} template files to {}",
        files::TEMPLATE_FILES.len(),
        target_dir.display()
    );
    Ok(())
}
