use super::{Element, SchemaModel, YIN_NAMESPACE};

const RPC: &str = "rpc";
const INPUT: &str = "input";
const NAME_ATTR: &str = "name";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcInput {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcDefinition {
    pub name: String,
    /// Declared inputs; position in the list is the argument index
    pub inputs: Vec<RpcInput>,
}

impl RpcDefinition {
    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|input| input.name.as_str())
    }
}

/// Collect every RPC of the model and its inputs, both in document order.
///
/// RPCs may sit anywhere in the tree (e.g. inside augments); all of them are
/// reported. Nodes lacking a `name` argument cannot be bound to a callback
/// and are skipped.
pub fn rpc_definitions(model: &SchemaModel) -> Vec<RpcDefinition> {
    let rpcs: Vec<RpcDefinition> = model
        .elements()
        .filter(|element| element.is(YIN_NAMESPACE, RPC))
        .filter_map(|rpc| match rpc.attr(NAME_ATTR) {
            Some(name) => Some(RpcDefinition {
                name: name.into(),
                inputs: rpc_inputs(name, rpc),
            }),
            None => {
                log::warn!("Skipping rpc without a name");
                None
            }
        })
        .collect();
    log::debug!("Found {} RPC(s) in data model", rpcs.len());
    rpcs
}

fn rpc_inputs(rpc_name: &str, rpc: &Element) -> Vec<RpcInput> {
    rpc.children_named(YIN_NAMESPACE, INPUT)
        .flat_map(Element::children)
        .filter_map(|node| match node.attr(NAME_ATTR) {
            Some(name) => Some(RpcInput { name: name.into() }),
            None => {
                log::warn!(
                    "Ignoring unnamed '{}' statement in input of rpc '{}'",
                    node.name(),
                    rpc_name
                );
                None
            }
        })
        .collect()
}
