//! Tvheadend configuration tree: on-disk document model and traversal.

mod config;
mod walker;

pub use config::{ElementaryStream, MultiplexConfig, ServiceConfig};
pub use walker::ServiceWalk;
