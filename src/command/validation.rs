use std::path::{Path, PathBuf};

use anyhow::Result;

use super::convert::{normalize_all, NormalizedModels};
use crate::argsets::{ModelArgs, ValidationArgs};
use crate::interfaces::{self, ValidatorFiles};

pub fn validation(args: &ValidationArgs) -> Result<()> {
    let models = normalize_all(&args.model)?;
    generate(&models, &args.model, &args.output_dir)?;
    Ok(())
}

pub(super) fn generate(
    models: &NormalizedModels,
    args: &ModelArgs,
    output_dir: &Path,
) -> Result<ValidatorFiles> {
    let augment_paths: Vec<PathBuf> = models
        .augments
        .iter()
        .map(|augment| augment.yin_path.clone())
        .collect();
    interfaces::generate_validators(
        &models.main.yin_path,
        &augment_paths,
        &args.search_path,
        output_dir,
    )
}
