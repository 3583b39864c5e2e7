pub mod directional;
pub mod feature;

pub use directional::*;
pub use feature::*;
