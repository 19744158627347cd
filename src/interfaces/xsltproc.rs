//! Validation artifacts: RelaxNG grammars and a Schematron stylesheet,
//! produced from a DSDL schema that pyang derives from the model.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use tempfile::{Builder, NamedTempFile};

use super::tool;
use crate::constants::files;
use crate::helpers::base_path;

/// Files left in the output directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorFiles {
    pub data_rng: PathBuf,
    pub gdefs_rng: PathBuf,
    pub schematron_xsl: PathBuf,
}

impl ValidatorFiles {
    fn new(yin_path: &Path, output_dir: &Path) -> Self {
        let stem = file_stem(yin_path);
        let file_name = yin_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| stem.clone());
        ValidatorFiles {
            data_rng: output_dir.join(format!("{stem}-data.rng")),
            gdefs_rng: output_dir.join(format!("{stem}-gdefs.rng")),
            schematron_xsl: output_dir.join(format!("{file_name}-schematron.xsl")),
        }
    }
}

pub fn generate_validators(
    yin_path: &Path,
    augment_yin_paths: &[PathBuf],
    search_path: &Path,
    output_dir: &Path,
) -> Result<ValidatorFiles> {
    let outputs = ValidatorFiles::new(yin_path, output_dir);
    let stem = file_stem(yin_path);
    fs::create_dir_all(output_dir)
        .with_context(|| format!("cannot create output directory {}", output_dir.display()))?;

    // Intermediate files are removed when these go out of scope
    let dsdl = temp_file("dsdl", ".dsdl")?;
    let schematron_raw = temp_file("schxsl", "")?;
    let schematron_expanded = temp_file("schxsl-expanded", "")?;

    log::info!("Generating DSDL schema for {}", yin_path.display());
    tool::run(
        Command::new(base_path::PYANG.as_path())
            .arg("-p")
            .arg(search_path)
            .args(["-f", "dsdl", "--dsdl-no-documentation", "--dsdl-no-dublin-core"])
            .arg("-o")
            .arg(dsdl.path())
            .arg(yin_path)
            .args(augment_yin_paths),
    )?;

    log::info!("Generating RelaxNG schemas");
    tool::run(
        xsltproc()
            .arg("--output")
            .arg(&outputs.data_rng)
            .args(["--stringparam", "basename"])
            .arg(format!("./{stem}"))
            .args(["--stringparam", "target", "data"])
            .args(["--stringparam", "schema-dir"])
            .arg(base_path::RNGLIB_DIR.as_path())
            .arg(stylesheet(files::GEN_RELAXNG_XSL))
            .arg(dsdl.path()),
    )?;
    tool::run(
        xsltproc()
            .arg("--output")
            .arg(&outputs.gdefs_rng)
            .args(["--stringparam", "gdefs-only", "1"])
            .arg(stylesheet(files::GEN_RELAXNG_XSL))
            .arg(dsdl.path()),
    )?;

    log::info!("Generating Schematron stylesheet");
    tool::run(
        xsltproc()
            .arg("--output")
            .arg(schematron_raw.path())
            .args(["--stringparam", "target", "data"])
            .arg(stylesheet(files::GEN_SCHEMATRON_XSL))
            .arg(dsdl.path()),
    )?;
    let expanded = tool::run(
        xsltproc()
            .arg(stylesheet(files::ISO_ABSTRACT_EXPAND_XSL))
            .arg(schematron_raw.path()),
    )?;
    fs::write(schematron_expanded.path(), expanded).with_context(|| {
        format!(
            "cannot write temporary file {}",
            schematron_expanded.path().display()
        )
    })?;
    tool::run(
        xsltproc()
            .arg("-o")
            .arg(&outputs.schematron_xsl)
            .arg(stylesheet(files::ISO_SVRL_FOR_XSLT1_XSL))
            .arg(schematron_expanded.path()),
    )?;

    log::debug!("Validation artifacts: {:?}", outputs);
    Ok(outputs)
}

fn xsltproc() -> Command {
    Command::new(base_path::XSLTPROC.as_path())
}

fn stylesheet(name: &str) -> PathBuf {
    base_path::XSLT_DIR.join(name)
}

fn temp_file(prefix: &str, suffix: &str) -> Result<NamedTempFile> {
    Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile()
        .context("cannot create temporary file")
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names_follow_the_model() {
        let files = ValidatorFiles::new(Path::new("/models/ietf-system.yin"), Path::new("out"));
        assert_eq!(files.data_rng, Path::new("out/ietf-system-data.rng"));
        assert_eq!(files.gdefs_rng, Path::new("out/ietf-system-gdefs.rng"));
        assert_eq!(
            files.schematron_xsl,
            Path::new("out/ietf-system.yin-schematron.xsl")
        );
    }

    #[test]
    fn temp_files_are_removed_on_drop() {
        let file = temp_file("dsdl", ".dsdl").unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());
        assert!(path.to_string_lossy().ends_with(".dsdl"));
        drop(file);
        assert!(!path.exists());
    }
}
