//! On-disk Tvheadend configuration documents.
//!
//! Tvheadend keeps one JSON object per multiplex (`<mux>/config`) and one
//! per service (`<mux>/services/<uuid>`). Only the fields the VDR mapping
//! needs are modeled; every other key in the documents is ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConvertError, Result};

/// One physical transmission carrier (`<mux>/config`).
///
/// Immutable after load; shared by every service carried on the multiplex.
/// All listed fields are required, so a document missing one fails at
/// load time instead of during record assembly.
#[derive(Debug, Clone, Deserialize)]
pub struct MultiplexConfig {
    /// Delivery system identifier, e.g. `"DVBT"`. The fourth character
    /// selects the VDR source medium.
    pub delsys: String,
    /// Carrier frequency in Hz.
    pub frequency: u32,
    /// Original network id.
    pub onid: u16,
    /// Transport stream id.
    pub tsid: u16,
    /// Forward error correction rate, e.g. `"5/6"`.
    pub fec_hi: String,
    /// Constellation, e.g. `"QAM/64"`.
    pub constellation: String,
    /// Channel bandwidth, e.g. `"8MHz"`.
    pub bandwidth: String,
    /// Transmission mode, e.g. `"8k"`.
    pub transmission_mode: String,
    /// Guard interval, e.g. `"1/4"`.
    pub guard_interval: String,
}

/// One broadcast service (`<mux>/services/<file>`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Service name as announced by the broadcaster.
    pub svcname: String,
    /// Service id.
    pub sid: u16,
    /// Elementary streams in transport order.
    pub stream: Vec<ElementaryStream>,
}

/// One elementary stream of a service.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementaryStream {
    /// Stream type tag, e.g. `"H264"` or `"AAC"`.
    #[serde(rename = "type")]
    pub stream_type: String,
    /// Packet identifier.
    pub pid: u16,
}

impl MultiplexConfig {
    /// Load a multiplex document, attaching the path to any failure.
    pub fn load(path: &Path) -> Result<Self> {
        load_document(path)
    }
}

impl ServiceConfig {
    /// Load a service document, attaching the path to any failure.
    pub fn load(path: &Path) -> Result<Self> {
        load_document(path)
    }
}

fn load_document<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
