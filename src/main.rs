//! tvh2vdr: Convert Tvheadend channel configuration to VDR format.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info, warn};

use tvh2vdr::{convert_tree, Channel, ConvertError, StreamTypeGroups};

mod context;

use context::Cli;

fn main() {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    std::process::exit(run(&args));
}

fn run(args: &Cli) -> i32 {
    let channels = match resolve_home(&args.user) {
        Some(home) => {
            let root = home.join(&args.path);
            match convert_tree(&root, &StreamTypeGroups::default()) {
                Ok(channels) => channels,
                Err(e) => {
                    error!("{}", e);
                    return 1;
                }
            }
        }
        None => {
            warn!("Unknown user {:?}: no channels to convert", args.user);
            Vec::new()
        }
    };

    if let Err(e) = write_output(args.outfile.as_deref(), &channels) {
        error!("{}", e);
        return 1;
    }
    0
}

/// Home directory of the account whose configuration tree is converted.
#[cfg(unix)]
fn resolve_home(user: &str) -> Option<PathBuf> {
    match nix::unistd::User::from_name(user) {
        Ok(Some(entry)) => Some(entry.dir),
        Ok(None) => None,
        Err(e) => {
            warn!("Failed to look up user {:?}: {}", user, e);
            None
        }
    }
}

/// No passwd database to consult; fall back to the current user's home.
#[cfg(not(unix))]
fn resolve_home(_user: &str) -> Option<PathBuf> {
    dirs::home_dir()
}

/// Render all records up front, then write them in one pass.
fn write_output(outfile: Option<&Path>, channels: &[Channel]) -> Result<(), ConvertError> {
    let mut rendered = String::new();
    for channel in channels {
        rendered.push_str(&channel.to_string());
        rendered.push('\n');
    }

    match outfile {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| ConvertError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Wrote {} channels to {}", channels.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .map_err(|source| ConvertError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }
    Ok(())
}
