use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Result};
use env_logger::Env;

use transapi_gen::argsets::{ModelArgs, TransapiArgs, ValidationArgs};
use transapi_gen::command;
use transapi_gen::constants::{defaults, envvars};
use transapi_gen::helpers;

const CMD_CONVERT: &str = "convert";
const CMD_VALIDATION: &str = "validation";
const CMD_TRANSAPI: &str = "transapi";

const HELP: &str = "\
transapi-gen - convert YANG models to YIN, generate validation schemas and
transAPI callback modules for libnetconf

USAGE:
  transapi-gen <convert|validation|transapi> --model <FILE> [OPTIONS]

COMMON OPTIONS:
  --model <FILE>           Data model (YANG or YIN)
  --augment-model <FILE>   Augment model; may be repeated
  --search-path <DIR>      pyang search path [default: .]

VALIDATION / TRANSAPI OPTIONS:
  --output-dir <DIR>       Where generated files are placed [default: .]

TRANSAPI OPTIONS:
  --name <NAME>            Module name [default: model file name]
  --paths <FILE>           Watched configuration paths and namespace prefixes
  --template-dir <DIR>     Directory with autotools templates
";

fn main() {
    let dotenv_path = helpers::load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    if let Some(path) = dotenv_path {
        log::debug!("Loaded {}", path.display());
    }

    if let Err(e) = ctrlc::set_handler(|| {
        println!("Killed by user!");
        process::exit(0);
    }) {
        log::warn!("Could not install interrupt handler: {}", e);
    }

    // Diagnostics go to stdout and the exit status stays 0
    if let Err(e) = run() {
        log::error!("{:?}", e);
        println!("{e:#}");
    }
}

fn run() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();
    let subcommand = args.subcommand()?;
    if args.contains(["-h", "--help"]) || subcommand.is_none() {
        print!("{HELP}");
        return Ok(());
    }
    let subcommand = subcommand
        .filter(|cmd| [CMD_CONVERT, CMD_VALIDATION, CMD_TRANSAPI].contains(&cmd.as_str()))
        .ok_or_else(|| {
            anyhow!(
                "Subcommand must be one of '{CMD_CONVERT}', '{CMD_VALIDATION}', '{CMD_TRANSAPI}'"
            )
        })?;

    let model = ModelArgs {
        model: args.value_from_str("--model")?,
        augment_models: args.values_from_str("--augment-model")?,
        search_path: args
            .opt_value_from_str("--search-path")?
            .unwrap_or_else(|| PathBuf::from(defaults::SEARCH_PATH)),
    };

    match subcommand.as_str() {
        CMD_CONVERT => {
            ensure_consumed(args)?;
            command::convert(&model)
        }
        CMD_VALIDATION => {
            let validation = validation_args(&mut args, model)?;
            ensure_consumed(args)?;
            command::validation(&validation)
        }
        // CMD_TRANSAPI, the only one left after the filter above
        _ => {
            let transapi = TransapiArgs {
                validation: validation_args(&mut args, model)?,
                name: args.opt_value_from_str("--name")?,
                paths: args.opt_value_from_str("--paths")?,
                template_dir: args.opt_value_from_str("--template-dir")?,
            };
            ensure_consumed(args)?;
            command::transapi(&transapi)
        }
    }
}

fn validation_args(args: &mut pico_args::Arguments, model: ModelArgs) -> Result<ValidationArgs> {
    Ok(ValidationArgs {
        model,
        output_dir: args
            .opt_value_from_str("--output-dir")?
            .unwrap_or_else(|| PathBuf::from(defaults::OUTPUT_DIR)),
    })
}

fn ensure_consumed(args: pico_args::Arguments) -> Result<()> {
    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(anyhow!("Unexpected arguments: {:?}", remaining));
    }
    Ok(())
}
