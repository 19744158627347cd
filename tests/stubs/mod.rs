#![allow(dead_code)]
// Each test crate uses a different subset of the fixtures

pub mod models;

pub const PATHS_FILE: &str = "\
# watched configuration
/system/clock

pfx=urn:example:ns
/sys:system/sys:hostname
";

/// Callbacks file for `PATHS_FILE` and `models::REBOOT_YIN`
pub const REBOOT_C: &str = include_str!("reboot.c");
