#![allow(dead_code)]
mod outline_properties;

pub use outline_properties::*;
