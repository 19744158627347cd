use crate::constants::defaults::TRANSAPI_VERSION;

pub fn render_preamble() -> String {
    format!(
        "\
/*
 * This is automaticaly generated callbacks file
 * It contains 3 parts: Configuration callbacks, RPC callbacks and state data callbacks.
 * Do NOT alter function signatures or any structures unless you know exactly what you are doing.
 */

#include <stdlib.h>
#include <libxml/tree.h>
#include <libnetconf_xml.h>

/* transAPI version which must be compatible with libnetconf */
int transapi_version = {TRANSAPI_VERSION};

/* Signal to libnetconf that configuration data were modified by any callback.
 * 0 - data not modified
 * 1 - data have been modified
 */
int config_modified = 0;

"
    )
}

pub const INIT_STUB: &str = "\
/**
 * @brief Initialize plugin after loaded and before any other functions are called.
 *
 * @param[out] running\tCurrent configuration of managed device.

 * @return EXIT_SUCCESS or EXIT_FAILURE
 */
int transapi_init(xmlDocPtr * running)
{
\treturn EXIT_SUCCESS;
}

";

pub const CLOSE_STUB: &str = "\
/**
 * @brief Free all resources allocated on plugin runtime and prepare plugin for removal.
 */
void transapi_close(void)
{
\treturn;
}

";

pub const STATE_STUB: &str = "\
/**
 * @brief Retrieve state data from device and return them as XML document
 *
 * @param model\tDevice data model. libxml2 xmlDocPtr.
 * @param running\tRunning datastore content. libxml2 xmlDocPtr.
 * @param[out] err  Double poiter to error structure. Fill error when some occurs.
 * @return State data as libxml2 xmlDocPtr or NULL in case of error.
 */
xmlDocPtr get_state_data (xmlDocPtr model, xmlDocPtr running, struct nc_err **err)
{
\treturn(NULL);
}
";
