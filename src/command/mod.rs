mod convert;
mod transapi;
mod validation;

pub use convert::convert;
pub use transapi::transapi;
pub use validation::validation;
