pub const LOG_LEVEL: &str = "INFO";
pub const SEARCH_PATH: &str = ".";
pub const OUTPUT_DIR: &str = ".";

pub const PYANG: &str = "pyang";
pub const XSLTPROC: &str = "xsltproc";
pub const RNGLIB_DIR: &str = "/usr/local/share/libnetconf/rnglib/";
pub const XSLT_DIR: &str = "/usr/local/share/libnetconf/xslt/";

// Searched in order when no template directory is configured
pub const TEMPLATE_SEARCH_DIRS: &[&str] = &[
    "/usr/share/libnetconf/templates/",
    "/usr/local/share/libnetconf/templates/",
    "./templates/",
    "./",
];

/// transAPI version the generated module declares; must match libnetconf
pub const TRANSAPI_VERSION: u32 = 3;
