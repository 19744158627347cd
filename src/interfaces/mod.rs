//! External collaborators: schema normalization and validation toolchain

mod pyang;
mod tool;
mod xsltproc;

pub use pyang::{normalize, NormalizedModel};
pub use xsltproc::{generate_validators, ValidatorFiles};
