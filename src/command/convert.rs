use anyhow::Result;

use crate::argsets::ModelArgs;
use crate::interfaces::{self, NormalizedModel};

pub struct NormalizedModels {
    pub main: NormalizedModel,
    pub augments: Vec<NormalizedModel>,
}

pub fn convert(args: &ModelArgs) -> Result<()> {
    let models = normalize_all(args)?;
    log::info!(
        "Converted {} model(s) to YIN",
        models.augments.len() + 1
    );
    Ok(())
}

pub(super) fn normalize_all(args: &ModelArgs) -> Result<NormalizedModels> {
    let main = interfaces::normalize(&args.model, &args.search_path)?;
    let augments = args
        .augment_models
        .iter()
        .map(|augment| interfaces::normalize(augment, &args.search_path))
        .collect::<Result<Vec<_>>>()?;
    Ok(NormalizedModels { main, augments })
}
