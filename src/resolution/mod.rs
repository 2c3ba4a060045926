mod face_resolver;
mod settle_detector;
mod roll_aggregator;

pub use face_resolver::*;
pub use settle_detector::*;
pub use roll_aggregator::*;

#[cfg(test)]
mod settle_detector_tests;
#[cfg(test)]
mod roll_aggregator_tests;
