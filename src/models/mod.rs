mod vectors;
mod quaternion;
mod die_motion;

pub use vectors::*;
pub use quaternion::*;
pub use die_motion::*;
