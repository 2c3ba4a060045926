mod die_face;
mod die_type;
mod dice_group;
mod catalog;
pub mod geometry;

pub use die_face::*;
pub use die_type::*;
pub use dice_group::*;
pub use catalog::*;

#[cfg(test)]
mod catalog_tests;
