//! Normalized data model and the queries the generator runs over it

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

mod rpc;
mod tree;

pub use rpc::{rpc_definitions, RpcDefinition, RpcInput};
pub use tree::{Descendants, Element, SchemaModel};

/// Namespace of YIN, the XML form of YANG
pub const YIN_NAMESPACE: &str = "urn:ietf:params:xml:ns:yang:yin:1";

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Can not parse data model: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Can not parse data model: {0}")]
    Attribute(#[from] AttrError),
    #[error("Can not parse data model: unknown namespace prefix '{0}'")]
    UnknownPrefix(String),
    #[error("Can not parse data model: {0}")]
    Structure(&'static str),
}
