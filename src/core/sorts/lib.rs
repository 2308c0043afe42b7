mod error;
mod insertion;
mod quick;

pub use error::*;
pub use insertion::*;
pub use quick::*;
