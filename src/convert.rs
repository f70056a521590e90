//! Conversion driver: drain the tree walk into channel records.

use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::tvheadend::ServiceWalk;
use crate::vdr::{Channel, StreamTypeGroups};

/// Convert every service under `root` into a channels.conf record.
///
/// Records are returned fully materialized so the caller can open and
/// write the output destination in one pass; a late write failure cannot
/// silently truncate already-converted records.
pub fn convert_tree(root: &Path, groups: &StreamTypeGroups) -> Result<Vec<Channel>> {
    let mut channels = Vec::new();
    for pair in ServiceWalk::new(root)? {
        let (mux, service) = pair?;
        let channel = Channel::build(&mux, &service, groups)?;
        debug!("Mapped service {:?} (sid {})", service.svcname, service.sid);
        channels.push(channel);
    }
    info!(
        "Converted {} channels from {}",
        channels.len(),
        root.display()
    );
    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_mux(root: &Path, network: &str, mux: &str, delsys: &str) -> PathBuf {
        let dir = root
            .join("input/dvb/networks")
            .join(network)
            .join("muxes")
            .join(mux);
        fs::create_dir_all(dir.join("services")).unwrap();
        fs::write(
            dir.join("config"),
            format!(
                r#"{{
                    "delsys": "{}",
                    "frequency": 474000000,
                    "onid": 1,
                    "tsid": 2,
                    "fec_hi": "5/6",
                    "constellation": "QAM/64",
                    "bandwidth": "8MHz",
                    "transmission_mode": "8k",
                    "guard_interval": "1/4"
                }}"#,
                delsys
            ),
        )
        .unwrap();
        dir
    }

    fn write_service(mux_dir: &Path, file: &str, name: &str, sid: u16) {
        fs::write(
            mux_dir.join("services").join(file),
            format!(
                r#"{{
                    "svcname": "{}",
                    "sid": {},
                    "stream": [
                        {{"type": "H264", "pid": 101}},
                        {{"type": "AAC", "pid": 201}}
                    ]
                }}"#,
                name, sid
            ),
        )
        .unwrap();
    }

    fn render(channels: &[Channel]) -> String {
        channels
            .iter()
            .map(|c| format!("{}\n", c))
            .collect::<String>()
    }

    #[test]
    fn test_end_to_end_single_service() {
        let tmp = TempDir::new().unwrap();
        let dir = write_mux(tmp.path(), "net", "mux1", "DVBT");
        write_service(&dir, "svc1", "TestChan", 100);

        let channels = convert_tree(tmp.path(), &StreamTypeGroups::default()).unwrap();
        assert_eq!(
            render(&channels),
            "TestChan;-:474000000:I0C56D0G4M64B8T8Y0:T:0:101:201:0:0:100:1:2:0\n"
        );
    }

    #[test]
    fn test_missing_root_produces_empty_output() {
        let tmp = TempDir::new().unwrap();
        let channels =
            convert_tree(&tmp.path().join("nope"), &StreamTypeGroups::default()).unwrap();
        assert!(channels.is_empty());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let tmp = TempDir::new().unwrap();
        for (mux, names) in [("mux-b", ["Delta", "Echo"]), ("mux-a", ["Alpha", "Bravo"])] {
            let dir = write_mux(tmp.path(), "net", mux, "DVBT");
            for (i, name) in names.iter().enumerate() {
                write_service(&dir, &format!("svc{}", i), name, (i + 1) as u16);
            }
        }

        let groups = StreamTypeGroups::default();
        let first = render(&convert_tree(tmp.path(), &groups).unwrap());
        let second = render(&convert_tree(tmp.path(), &groups).unwrap());
        assert_eq!(first, second);
        // Sorted walk order: mux-a's services before mux-b's.
        let names: Vec<&str> = first
            .lines()
            .map(|line| line.split_once(";-").unwrap().0)
            .collect();
        assert_eq!(names, ["Alpha", "Bravo", "Delta", "Echo"]);
    }

    #[test]
    fn test_unsupported_delivery_system_aborts() {
        let tmp = TempDir::new().unwrap();
        let dir = write_mux(tmp.path(), "net", "mux1", "DVBX");
        write_service(&dir, "svc1", "TestChan", 100);

        let err = convert_tree(tmp.path(), &StreamTypeGroups::default()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnsupportedDeliverySystem { .. }
        ));
    }
}
