//! Source generation for transAPI callback modules
//!
//! Everything here is a pure transformation of in-memory inputs into C
//! source text. The only filesystem access is [`CallbacksModule::write`].

use thiserror::Error;

mod config_callbacks;
mod definitions;
mod ident;
mod lifecycle;
mod module;
mod namespaces;
mod rpc_callbacks;

pub use config_callbacks::{config_callbacks, render_config_section, ConfigCallback};
pub use definitions::{classify, read_definitions, Definitions, NamespaceMapping};
pub use ident::{sanitize, IdentRegistry};
pub use module::CallbacksModule;
pub use namespaces::render_namespace_table;
pub use rpc_callbacks::{render_rpc_section, rpc_callbacks, RpcArgument, RpcCallback};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Line {0} is not valid namespace definition nor XPath.")]
    InvalidDefinition(String),
    #[error("At least one path is required.")]
    EmptyPathList,
}

/// Quote `value` as a C string literal.
fn c_string(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            literal.push('\\');
        }
        literal.push(c);
    }
    literal.push('"');
    literal
}
