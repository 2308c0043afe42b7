mod provider;
mod rng;

pub use provider::*;
pub use rng::*;
