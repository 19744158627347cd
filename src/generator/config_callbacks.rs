use super::{c_string, sanitize, GenerateError, IdentRegistry};

const FUNCTION_PREFIX: &str = "callback";

const SECTION_HEADER: &str = "\
/*
* CONFIGURATION callbacks
* Here follows set of callback functions run every time some change in associated part of running datastore occurs.
* You can safely modify the bodies of all function as well as add new functions for better lucidity of code.
*/

";

const TABLE_HEADER: &str = "\
/*
* Structure transapi_config_callbacks provide mapping between callback and path in configuration datastore.
* It is used by libnetconf library to decide which callbacks will be run.
* DO NOT alter this structure
*/
struct transapi_data_callbacks clbks =  {
";

/// A watched path bound to the stub that handles its changes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigCallback {
    pub path: String,
    pub function: String,
}

/// Bind each path to a uniquely named stub, keeping input order.
pub fn config_callbacks(paths: &[String]) -> Result<Vec<ConfigCallback>, GenerateError> {
    if paths.is_empty() {
        return Err(GenerateError::EmptyPathList);
    }

    let mut registry = IdentRegistry::default();
    Ok(paths
        .iter()
        .map(|path| ConfigCallback {
            path: path.clone(),
            function: registry.issue(format!("{FUNCTION_PREFIX}{}", sanitize(path))),
        })
        .collect())
}

/// Stub functions followed by the `clbks` registration table.
pub fn render_config_section(callbacks: &[ConfigCallback]) -> String {
    let mut content = String::from(SECTION_HEADER);
    for callback in callbacks {
        content += &render_stub(callback);
    }

    let entries: Vec<String> = callbacks
        .iter()
        .map(|callback| {
            format!(
                "\n\t\t{{.path = {}, .func = {}}}",
                c_string(&callback.path),
                callback.function
            )
        })
        .collect();

    content += TABLE_HEADER;
    content += &format!("\t.callbacks_count = {},\n", callbacks.len());
    content += "\t.data = NULL,\n";
    content += &format!("\t.callbacks = {{{}\n\t}}\n", entries.join(","));
    content += "};\n\n";
    content
}

fn render_stub(callback: &ConfigCallback) -> String {
    format!(
        "/**\n \
         * @brief This callback will be run when node in path {path} changes\n \
         *\n \
         * @param[in] data\tDouble pointer to void. Its passed to every callback. You can share data using it.\n \
         * @param[in] op\tObserved change in path. XMLDIFF_OP type.\n \
         * @param[in] node\tModified node. if op == XMLDIFF_REM its copy of node removed.\n \
         * @param[out] error\tIf callback fails, it can return libnetconf error structure with a failure description.\n \
         *\n \
         * @return EXIT_SUCCESS or EXIT_FAILURE\n \
         */\n\
         /* !DO NOT ALTER FUNCTION SIGNATURE! */\n\
         int {function} (void ** data, XMLDIFF_OP op, xmlNodePtr node, struct nc_err** error)\n\
         {{\n\treturn EXIT_SUCCESS;\n}}\n\n",
        // A `*/` inside the path would end the comment early
        path = callback.path.replace("*/", "*\\/"),
        function = callback.function,
    )
}
