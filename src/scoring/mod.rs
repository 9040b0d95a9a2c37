pub mod constants;
pub mod tier;

pub use constants::*;
pub use tier::{points, tier, Tier};
