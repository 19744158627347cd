use std::fs;

use anyhow::{Context, Result};

use super::{convert::normalize_all, validation};
use crate::argsets::TransapiArgs;
use crate::generator::{read_definitions, CallbacksModule};
use crate::module_mgmt::{self, templates};
use crate::schema::rpc_definitions;

pub fn transapi(args: &TransapiArgs) -> Result<()> {
    let module_name = args.module_name();
    log::info!("Generating transAPI module '{}'", module_name);

    let model_args = &args.validation.model;
    let models = normalize_all(model_args)?;
    validation::generate(&models, model_args, &args.validation.output_dir)?;

    // Build the callbacks in memory first so bad definitions leave nothing behind
    let definitions_text = args
        .paths
        .as_ref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("cannot read paths file {}", path.display()))
        })
        .transpose()?;
    let definitions = read_definitions(definitions_text.as_deref())?;
    let rpcs = rpc_definitions(&models.main.model);
    let module = CallbacksModule::build(definitions, &rpcs)?;

    let template_dir = templates::find_templates(args.template_dir.as_deref())?;
    let target_dir = module_mgmt::create_module_dir(&args.validation.output_dir, &module_name)?;
    templates::generate_configure_in(&template_dir, &target_dir, &module_name)?;
    templates::copy_template_files(&template_dir, &target_dir)?;
    module.write(&target_dir, &module_name)?;

    log::info!("Module '{}' generated in {}", module_name, target_dir.display());
    Ok(())
}
