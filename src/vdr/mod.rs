//! VDR channels.conf output format.

mod channel;
mod params;

pub use channel::{Channel, StreamTypeGroups};
pub use params::TuningParams;
