use std::path::PathBuf;

/// Options shared by every sub-command
#[derive(Clone, Debug)]
pub struct ModelArgs {
    pub model: PathBuf,
    pub augment_models: Vec<PathBuf>,
    pub search_path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct ValidationArgs {
    pub model: ModelArgs,
    pub output_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct TransapiArgs {
    pub validation: ValidationArgs,
    pub name: Option<String>,
    pub paths: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
}

impl TransapiArgs {
    /// `--name`, or the model's file name without extension
    pub fn module_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.validation
            .model
            .model
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
