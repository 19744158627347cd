//! Generator of libnetconf transAPI callback modules.
//!
//! Reads a YANG/YIN data model and a list of watched configuration paths,
//! and emits a C source file with one stub per path and per RPC plus the
//! tables libnetconf uses to dispatch to them.

pub mod argsets;
pub mod command;
pub mod constants;
pub mod generator;
pub mod helpers;
pub mod interfaces;
pub mod module_mgmt;
pub mod schema;
