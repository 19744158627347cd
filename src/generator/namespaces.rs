use super::{c_string, NamespaceMapping};

const SENTINEL: &str = "NULL, NULL";

/// `namespace_mapping` array: prefix, URI, prefix, URI, ..., NULL, NULL
pub fn render_namespace_table(namespaces: &[NamespaceMapping]) -> String {
    let mut table = String::from("char * namespace_mapping[] = {");
    for ns in namespaces {
        table += &format!("{}, {}, ", c_string(&ns.prefix), c_string(&ns.uri));
    }
    table += SENTINEL;
    table += "};\n";

    format!(
        "/*\n * Mapping prefixes with namespaces.\n * Do NOT modify this structure!\n */\n{table}\n"
    )
}
