use std::{env, path::PathBuf};

use once_cell::sync::Lazy;

use crate::constants::{defaults, envvars};

pub static PYANG: Lazy<PathBuf> = Lazy::new(|| env_or(envvars::PYANG, defaults::PYANG));

pub static XSLTPROC: Lazy<PathBuf> = Lazy::new(|| env_or(envvars::XSLTPROC, defaults::XSLTPROC));

pub static RNGLIB_DIR: Lazy<PathBuf> =
    Lazy::new(|| env_or(envvars::RNGLIB_DIR, defaults::RNGLIB_DIR));

pub static XSLT_DIR: Lazy<PathBuf> = Lazy::new(|| env_or(envvars::XSLT_DIR, defaults::XSLT_DIR));

pub static TEMPLATE_DIR: Lazy<Option<PathBuf>> = Lazy::new(|| env_path(envvars::TEMPLATE_DIR));

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn env_or(var: &str, default: &str) -> PathBuf {
    env_path(var).unwrap_or_else(|| PathBuf::from(default))
}
