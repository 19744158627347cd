use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::lifecycle::{render_preamble, CLOSE_STUB, INIT_STUB, STATE_STUB};
use super::{
    config_callbacks, render_config_section, render_namespace_table, render_rpc_section,
    rpc_callbacks, ConfigCallback, Definitions, GenerateError, NamespaceMapping, RpcCallback,
};
use crate::constants::files;
use crate::schema::RpcDefinition;

/// Everything that goes into one generated callbacks file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbacksModule {
    pub namespaces: Vec<NamespaceMapping>,
    pub config: Vec<ConfigCallback>,
    /// Empty when the model defines no RPC; the RPC section is then omitted
    pub rpcs: Vec<RpcCallback>,
}

impl CallbacksModule {
    pub fn build(definitions: Definitions, rpcs: &[RpcDefinition]) -> Result<Self, GenerateError> {
        let config = config_callbacks(&definitions.paths)?;
        let rpcs = rpc_callbacks(rpcs);
        log::info!(
            "Generating {} configuration callback(s), {} RPC callback(s), {} namespace(s)",
            config.len(),
            rpcs.len(),
            definitions.namespaces.len()
        );
        Ok(CallbacksModule {
            namespaces: definitions.namespaces,
            config,
            rpcs,
        })
    }

    pub fn render(&self) -> String {
        let mut content = render_preamble();
        content += INIT_STUB;
        content += CLOSE_STUB;
        content += STATE_STUB;
        content += &render_namespace_table(&self.namespaces);
        content += &render_config_section(&self.config);
        if !self.rpcs.is_empty() {
            content += &render_rpc_section(&self.rpcs);
        }
        content
    }

    /// Write `<module_name>.c` into `dir`, returning its path.
    pub fn write(&self, dir: &Path, module_name: &str) -> Result<PathBuf> {
        let path = dir.join(format!("{module_name}.{}", files::C_EXTENSION));
        fs::write(&path, self.render())
            .with_context(|| format!("cannot write callbacks file {}", path.display()))?;
        log::info!("Callbacks written to {}", path.display());
        Ok(path)
    }
}
