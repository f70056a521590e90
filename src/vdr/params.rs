//! Delivery-parameter extraction for the channels.conf tuning fields.

use crate::error::{ConvertError, Result};
use crate::tvheadend::MultiplexConfig;

/// Tuning-side fields of a channels.conf entry, shared by every service
/// carried on one multiplex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuningParams {
    /// VDR source medium letter: 'T', 'C' or 'S'.
    pub source: char,
    /// Carrier frequency in Hz.
    pub frequency: u32,
    /// Original network id.
    pub network_id: u16,
    /// Transport stream id.
    pub transport_id: u16,
    /// Encoded parameter string, e.g. `"I0C56D0G4M64B8T8Y0"`.
    pub parameters: String,
}

impl TuningParams {
    /// Derive the tuning fields from a multiplex document.
    ///
    /// Fails when the delivery system does not name a terrestrial, cable
    /// or satellite medium, or when a modulation field lacks the shape
    /// the parameter grammar encodes.
    pub fn from_mux(mux: &MultiplexConfig) -> Result<Self> {
        let source = source_letter(&mux.delsys)?;
        let parameters = encode_parameters(mux)?;
        Ok(Self {
            source,
            frequency: mux.frequency,
            network_id: mux.onid,
            transport_id: mux.tsid,
            parameters,
        })
    }
}

/// The VDR source medium is the fourth character of the delivery system
/// identifier (`"DVBT"` -> 'T'). Anything outside {T, C, S} has no
/// representation in channels.conf and aborts the run.
fn source_letter(delsys: &str) -> Result<char> {
    match delsys.chars().nth(3) {
        Some(c) if matches!(c, 'T' | 'C' | 'S') => Ok(c),
        _ => Err(ConvertError::UnsupportedDeliverySystem {
            delsys: delsys.to_string(),
        }),
    }
}

/// Encode the modulation parameters as the fixed `I C D G M B T Y`
/// key/value sequence. `I`, `D` and `Y` have no Tvheadend equivalent and
/// always carry 0.
fn encode_parameters(mux: &MultiplexConfig) -> Result<String> {
    let fec = mux.fec_hi.replace('/', "");
    let guard = ratio_denominator("guard_interval", &mux.guard_interval)?;
    let modulation = ratio_denominator("constellation", &mux.constellation)?;
    let bandwidth = leading_char("bandwidth", &mux.bandwidth)?;
    let mode = leading_char("transmission_mode", &mux.transmission_mode)?;
    Ok(format!(
        "I0C{fec}D0G{guard}M{modulation}B{bandwidth}T{mode}Y0"
    ))
}

/// Part after the `/` of a ratio-shaped value (`"QAM/64"` -> `"64"`).
fn ratio_denominator<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    value
        .split_once('/')
        .map(|(_, denominator)| denominator)
        .ok_or_else(|| ConvertError::MalformedField {
            field,
            value: value.to_string(),
        })
}

/// First character of a value like `"8MHz"` or `"8k"`.
fn leading_char(field: &'static str, value: &str) -> Result<char> {
    value
        .chars()
        .next()
        .ok_or_else(|| ConvertError::MalformedField {
            field,
            value: value.to_string(),
        })
}
