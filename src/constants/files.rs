pub const YIN_EXTENSION: &str = "yin";
pub const C_EXTENSION: &str = "c";

pub const CONFIGURE_IN: &str = "configure.in";
pub const PROJECT_NAME_PLACEHOLDER: &str = "$$PROJECTNAME$$";

// Copied verbatim into every generated module directory
pub const TEMPLATE_FILES: &[&str] = &[
    "install-sh",
    "config.guess",
    "config.sub",
    "ltmain.sh",
    "Makefile.in",
];

pub const GEN_RELAXNG_XSL: &str = "gen-relaxng.xsl";
pub const GEN_SCHEMATRON_XSL: &str = "gen-schematron.xsl";
pub const ISO_ABSTRACT_EXPAND_XSL: &str = "iso_abstract_expand.xsl";
pub const ISO_SVRL_FOR_XSLT1_XSL: &str = "iso_svrl_for_xslt1.xsl";
