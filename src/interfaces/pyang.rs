use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

use super::tool;
use crate::constants::files;
use crate::helpers::base_path;
use crate::schema::SchemaModel;

/// A data model in YIN form, on disk and parsed
#[derive(Debug)]
pub struct NormalizedModel {
    pub yin_path: PathBuf,
    pub model: SchemaModel,
}

/// Bring a YANG or YIN model into YIN form.
///
/// Models in any other format are converted with pyang and the result is
/// stored beside the source as `<stem>.yin`. YIN input is read as is.
pub fn normalize(model_path: &Path, search_path: &Path) -> Result<NormalizedModel> {
    if is_yin(model_path) {
        log::debug!("{} is already YIN", model_path.display());
        let yin = fs::read_to_string(model_path)
            .with_context(|| format!("cannot read data model {}", model_path.display()))?;
        return Ok(NormalizedModel {
            yin_path: model_path.to_path_buf(),
            model: SchemaModel::parse(&yin)?,
        });
    }

    convert(base_path::PYANG.as_path(), model_path, search_path)
}

fn convert(pyang: &Path, model_path: &Path, search_path: &Path) -> Result<NormalizedModel> {
    log::info!("Converting {} to YIN", model_path.display());
    let stdout = tool::run(
        Command::new(pyang)
            .arg("-p")
            .arg(search_path)
            .args(["-f", "yin"])
            .arg(model_path),
    )?;
    let yin = String::from_utf8(stdout).context("pyang produced YIN that is not UTF-8")?;
    let model = SchemaModel::parse(&yin)?;

    let yin_path = model_path.with_extension(files::YIN_EXTENSION);
    fs::write(&yin_path, &yin)
        .with_context(|| format!("cannot write YIN model {}", yin_path.display()))?;
    log::info!("YIN model stored as {}", yin_path.display());

    Ok(NormalizedModel { yin_path, model })
}

fn is_yin(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(files::YIN_EXTENSION))
}
