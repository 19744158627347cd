use itertools::Itertools;

use super::{c_string, sanitize, IdentRegistry};
use crate::schema::RpcDefinition;

const FUNCTION_PREFIX: &str = "rpc_";
const INPUT_PARAM: &str = "input";

const SECTION_HEADER: &str = "\
/*
* RPC callbacks
* Here follows set of callback functions run every time RPC specific for this device arrives.
* You can safely modify the bodies of all function as well as add new functions for better lucidity of code.
* Every function takes array of inputs as an argument. On few first lines they are assigned to named variables. Avoid accessing the array directly.
* If input was not set in RPC message argument in set to NULL.
*/

";

const TABLE_HEADER: &str = "\
/*
* Structure transapi_rpc_callbacks provide mapping between callbacks and RPC messages.
* It is used by libnetconf library to decide which callbacks will be run when RPC arrives.
* DO NOT alter this structure
*/
struct transapi_rpc_callbacks rpc_clbks = {
";

/// An RPC input bound to the local variable holding it in the stub
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcArgument {
    pub name: String,
    pub local: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcCallback {
    pub name: String,
    pub function: String,
    /// Index in this list is the position in the stub's `input[]` array
    pub args: Vec<RpcArgument>,
}

impl RpcCallback {
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    pub fn arg_order(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|arg| arg.name.as_str())
    }
}

pub fn rpc_callbacks(rpcs: &[RpcDefinition]) -> Vec<RpcCallback> {
    let mut functions = IdentRegistry::default();
    rpcs.iter()
        .map(|rpc| {
            // Locals share the stub's scope with its parameter
            let mut locals = IdentRegistry::reserving([INPUT_PARAM]);
            RpcCallback {
                name: rpc.name.clone(),
                function: functions.issue(format!("{FUNCTION_PREFIX}{}", sanitize(&rpc.name))),
                args: rpc
                    .input_names()
                    .map(|name| RpcArgument {
                        name: name.into(),
                        local: locals.issue(sanitize(name)),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Stub functions followed by the `rpc_clbks` registration table.
pub fn render_rpc_section(callbacks: &[RpcCallback]) -> String {
    let mut content = String::from(SECTION_HEADER);
    for callback in callbacks {
        content += &render_stub(callback);
    }

    let entries = callbacks.iter().map(render_entry).join(",");
    content += TABLE_HEADER;
    content += &format!("\t.callbacks_count = {},\n", callbacks.len());
    content += &format!("\t.callbacks = {{{entries}\n\t}}");
    content += "\n};\n\n";
    content
}

fn render_stub(callback: &RpcCallback) -> String {
    let mut stub = format!(
        "nc_reply * {} (xmlNodePtr {INPUT_PARAM}[])\n{{\n",
        callback.function
    );
    for (index, arg) in callback.args.iter().enumerate() {
        stub += &format!("\txmlNodePtr {} = {INPUT_PARAM}[{index}];\n", arg.local);
    }
    stub += "\n\treturn NULL; \n}\n";
    stub
}

fn render_entry(callback: &RpcCallback) -> String {
    format!(
        "\n\t\t{{.name={}, .func={}, .arg_count={}, .arg_order={{{}}}}}",
        c_string(&callback.name),
        callback.function,
        callback.arg_count(),
        callback.arg_order().map(c_string).join(", "),
    )
}
