//! prlist CLI
//!
//! Prints every file under a directory as one bannered document.

use anyhow::Result;
use prlist::cli::{run, Cli, ParsedArgs, USAGE};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let options = match Cli::parse_args(std::env::args_os()) {
        ParsedArgs::Run(options) => options,
        ParsedArgs::Informational(e) => e.exit(),
        ParsedArgs::Usage => {
            eprintln!("{}", USAGE);
            std::process::exit(1);
        },
    };

    // Initialize logging; stdout is reserved for the document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(options.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    run::execute(&options, &mut stdout)?;

    Ok(())
}
