mod dice_count;
mod roll_session;
#[cfg(feature = "throws")]
mod throw;

pub use dice_count::*;
pub use roll_session::*;
#[cfg(feature = "throws")]
pub use throw::*;
