#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod color;
pub mod math;
pub mod power;
pub mod prelude;
