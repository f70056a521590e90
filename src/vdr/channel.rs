//! channels.conf records: stream-PID extraction and line formatting.

use std::fmt;

use super::params::TuningParams;
use crate::error::Result;
use crate::tvheadend::{ElementaryStream, MultiplexConfig, ServiceConfig};

/// VDR separates the channel name from its (empty) short name with `;`.
const NAME_SUFFIX: &str = ";-";

/// Stream-type tags recognized for each channels.conf PID column.
///
/// Each group lists the tags treated as equivalent; the groups feed the
/// video, audio and teletext/subtitle columns in that order. The default
/// table covers the tags Tvheadend emits for DVB services.
#[derive(Debug, Clone)]
pub struct StreamTypeGroups {
    pub video: Vec<String>,
    pub audio: Vec<String>,
    pub subtitle: Vec<String>,
}

impl Default for StreamTypeGroups {
    fn default() -> Self {
        Self {
            video: vec!["H264".to_string(), "MPEG2VIDEO".to_string()],
            audio: vec!["AAC".to_string(), "MPEG2AUDIO".to_string()],
            subtitle: vec!["DVBSUB".to_string()],
        }
    }
}

impl StreamTypeGroups {
    /// Collect the video, audio and subtitle PID columns from a service's
    /// stream list.
    ///
    /// Every matching PID is kept in stream order and comma-joined; a
    /// group with no matching stream yields the literal `"0"`.
    pub fn stream_pids(&self, streams: &[ElementaryStream]) -> (String, String, String) {
        (
            collect_pids(streams, &self.video),
            collect_pids(streams, &self.audio),
            collect_pids(streams, &self.subtitle),
        )
    }
}

fn collect_pids(streams: &[ElementaryStream], tags: &[String]) -> String {
    let pids: Vec<String> = streams
        .iter()
        .filter(|s| tags.iter().any(|t| t == &s.stream_type))
        .map(|s| s.pid.to_string())
        .collect();
    if pids.is_empty() {
        "0".to_string()
    } else {
        pids.join(",")
    }
}

/// One channels.conf entry.
///
/// `symbol_rate`, `ca` and `rid` are always 0: Tvheadend carries no
/// equivalent values and 0 is the format's "unset" marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub frequency: u32,
    pub parameters: String,
    pub source: char,
    pub symbol_rate: u32,
    pub vpid: String,
    pub apid: String,
    pub tpid: String,
    pub ca: u32,
    pub sid: u16,
    pub nid: u16,
    pub tid: u16,
    pub rid: u32,
}

impl Channel {
    /// Map one (multiplex, service) pair onto a channels.conf entry.
    pub fn build(
        mux: &MultiplexConfig,
        service: &ServiceConfig,
        groups: &StreamTypeGroups,
    ) -> Result<Self> {
        let params = TuningParams::from_mux(mux)?;
        let (vpid, apid, tpid) = groups.stream_pids(&service.stream);
        Ok(Self {
            name: format!("{}{}", service.svcname, NAME_SUFFIX),
            frequency: params.frequency,
            parameters: params.parameters,
            source: params.source,
            symbol_rate: 0,
            vpid,
            apid,
            tpid,
            ca: 0,
            sid: service.sid,
            nid: params.network_id,
            tid: params.transport_id,
            rid: 0,
        })
    }
}

impl fmt::Display for Channel {
    /// The colon-joined field order is fixed by the channels.conf grammar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}:{}",
            self.name,
            self.frequency,
            self.parameters,
            self.source,
            self.symbol_rate,
            self.vpid,
            self.apid,
            self.tpid,
            self.ca,
            self.sid,
            self.nid,
            self.tid,
            self.rid
        )
    }
}
