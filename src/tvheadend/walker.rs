//! Traversal of the multiplex/service tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, warn};

use super::config::{MultiplexConfig, ServiceConfig};
use crate::error::{ConvertError, Result};

/// Multiplex directories relative to the configuration root.
const MUX_PATTERN: &str = "input/dvb/networks/*/muxes/*";

/// Single-pass iterator over every (multiplex, service) pair in a
/// Tvheadend configuration tree.
///
/// A multiplex directory without a `services` subdirectory is skipped
/// without its `config` document ever being opened. Documents are loaded
/// lazily as iteration reaches them; a multiplex document is loaded once
/// and shared by all its services. Multiplex paths and service file names
/// are visited in sorted order, so repeated runs over an unmodified tree
/// yield the same sequence on every platform.
///
/// The iterator is finite and meant to be consumed exactly once; restart
/// by constructing a new walk over the same root. A missing root yields
/// an empty walk. Read and parse failures surface as `Err` items and the
/// caller is expected to abort on the first one.
pub struct ServiceWalk {
    muxes: std::vec::IntoIter<PathBuf>,
    current: Option<Mux>,
}

struct Mux {
    config: Rc<MultiplexConfig>,
    services: std::vec::IntoIter<PathBuf>,
}

impl ServiceWalk {
    /// Discover candidate multiplex directories under `root`.
    pub fn new(root: &Path) -> Result<Self> {
        let pattern = root.join(MUX_PATTERN);
        let mut muxes = Vec::new();
        for entry in glob::glob(&pattern.to_string_lossy())? {
            muxes.push(entry?);
        }
        muxes.sort();
        debug!(
            "Found {} candidate multiplex directories under {}",
            muxes.len(),
            root.display()
        );
        Ok(Self {
            muxes: muxes.into_iter(),
            current: None,
        })
    }

    /// Advance to the next multiplex that carries a `services` directory.
    fn next_mux(&mut self) -> Option<Result<Mux>> {
        loop {
            let mux_path = self.muxes.next()?;
            let services_path = mux_path.join("services");
            if !services_path.is_dir() {
                debug!("Skipping {}: no services directory", mux_path.display());
                continue;
            }
            let config = match MultiplexConfig::load(&mux_path.join("config")) {
                Ok(config) => Rc::new(config),
                Err(e) => return Some(Err(e)),
            };
            let services = match list_service_files(&services_path) {
                Ok(files) => files,
                Err(e) => return Some(Err(e)),
            };
            debug!(
                "Multiplex {}: {} service files",
                mux_path.display(),
                services.len()
            );
            return Some(Ok(Mux {
                config,
                services: services.into_iter(),
            }));
        }
    }
}

impl Iterator for ServiceWalk {
    type Item = Result<(Rc<MultiplexConfig>, ServiceConfig)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mux) = &mut self.current {
                if let Some(service_path) = mux.services.next() {
                    let config = Rc::clone(&mux.config);
                    return Some(
                        ServiceConfig::load(&service_path).map(|service| (config, service)),
                    );
                }
                self.current = None;
            }
            match self.next_mux()? {
                Ok(mux) => self.current = Some(mux),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Every regular file in a `services` directory, sorted by name. There is
/// no extension filter; Tvheadend names service files by UUID.
fn list_service_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| ConvertError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ConvertError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        } else {
            warn!("Ignoring non-file service entry {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}
