//! Command-line interface for prlist

use crate::config::RunOptions;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

pub mod run;

/// Usage line printed for any malformed invocation
pub const USAGE: &str = "Usage: prlist <directory>";

/// prlist - Concatenate a directory tree into one bannered document
#[derive(Parser, Debug)]
#[command(
    name = "prlist",
    version,
    about = "Concatenate every file in a directory tree into one document",
    long_about = "Walks <directory>, skips anything matched by patterns in <directory>/.prlistignore, \
                  and prints each remaining file behind a banner naming its relative path."
)]
pub struct Cli {
    /// Directory to combine
    pub directory: PathBuf,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Outcome of argument parsing
#[derive(Debug)]
pub enum ParsedArgs {
    /// Arguments are usable
    Run(RunOptions),
    /// Malformed invocation; the usage line should be shown
    Usage,
    /// Help or version was requested; clap renders and exits
    Informational(clap::Error),
}

impl Cli {
    pub fn into_options(self) -> RunOptions {
        RunOptions::new(self.directory).verbose(self.verbose)
    }

    /// Parse arguments, folding every clap failure except help/version into
    /// the single usage error
    pub fn parse_args<I, T>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => ParsedArgs::Run(cli.into_options()),
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParsedArgs::Informational(e),
                _ => ParsedArgs::Usage,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_directory() {
        match Cli::parse_args(["prlist", "src"]) {
            ParsedArgs::Run(options) => {
                assert_eq!(options, RunOptions::new("src"));
            },
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_flag() {
        match Cli::parse_args(["prlist", "-v", "."]) {
            ParsedArgs::Run(options) => assert!(options.verbose),
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_directory_is_accepted() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let directory = OsString::from_vec(b"caf\xe9".to_vec());

        match Cli::parse_args([OsString::from("prlist"), directory.clone()]) {
            ParsedArgs::Run(options) => assert_eq!(options.directory, PathBuf::from(directory)),
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn test_wrong_argument_count_is_usage() {
        assert!(matches!(Cli::parse_args(["prlist"]), ParsedArgs::Usage));
        assert!(matches!(Cli::parse_args(["prlist", "a", "b"]), ParsedArgs::Usage));
    }

    #[test]
    fn test_help_is_informational() {
        assert!(matches!(
            Cli::parse_args(["prlist", "--help"]),
            ParsedArgs::Informational(_)
        ));
    }
}
