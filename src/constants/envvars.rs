pub const LOG_LEVEL: &str = "LOGGING_LEVEL";

pub const PYANG: &str = "TRANSAPI_PYANG";
pub const XSLTPROC: &str = "TRANSAPI_XSLTPROC";
pub const RNGLIB_DIR: &str = "TRANSAPI_RNGLIB";
pub const XSLT_DIR: &str = "TRANSAPI_XSLTDIR";
pub const TEMPLATE_DIR: &str = "TRANSAPI_TEMPLATE_DIR";
