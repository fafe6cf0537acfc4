//! Convenience re-export of the crate surface

pub use crate::color::*;
pub use crate::math::{Ratio8, Ratio8Ops};
pub use crate::power::*;

pub use rgb::Rgb;
