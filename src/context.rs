use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(name = "tvh2vdr")]
#[clap(about = "Convert Tvheadend channel configuration to VDR format", long_about = None)]
#[clap(version)]
pub(crate) struct Cli {
    /// The Tvheadend user name.{n}
    /// The configuration tree is read from this system account's
    /// home directory.
    #[clap(short, long, default_value = "hts")]
    pub user: String,

    /// The Tvheadend config path relative to the user home directory.
    #[clap(short, long, default_value = ".hts/tvheadend")]
    pub path: String,

    /// Output to a file instead of stdout.{n}
    /// When the flag is given without a value, channels.conf is written.
    #[clap(
        short,
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "channels.conf"
    )]
    pub outfile: Option<PathBuf>,

    /// Enable verbose logging.
    #[clap(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tvh2vdr"]);
        assert_eq!(cli.user, "hts");
        assert_eq!(cli.path, ".hts/tvheadend");
        assert!(cli.outfile.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_bare_outfile_flag_defaults_to_channels_conf() {
        let cli = Cli::parse_from(["tvh2vdr", "-o"]);
        assert_eq!(cli.outfile, Some(PathBuf::from("channels.conf")));
    }

    #[test]
    fn test_outfile_with_value() {
        let cli = Cli::parse_from(["tvh2vdr", "--outfile", "/tmp/out.conf"]);
        assert_eq!(cli.outfile, Some(PathBuf::from("/tmp/out.conf")));
    }
}
