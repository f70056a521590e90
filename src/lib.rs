//! tvh2vdr library - Tvheadend to VDR channel configuration conversion.
//!
//! Walks a Tvheadend DVB configuration tree (one JSON document per
//! multiplex and per service) and maps every service onto a VDR
//! channels.conf entry.

pub mod error;
pub mod tvheadend;
pub mod vdr;

mod convert;

// Re-export commonly used types
pub use convert::convert_tree;
pub use error::{ConvertError, Result};
pub use tvheadend::{ElementaryStream, MultiplexConfig, ServiceConfig, ServiceWalk};
pub use vdr::{Channel, StreamTypeGroups, TuningParams};
