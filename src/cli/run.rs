//! Run orchestration: load patterns, report them, collect, combine, print

use crate::combine::Combiner;
use crate::config::RunOptions;
use crate::core::error::PrlistError;
use crate::core::types::IGNORE_FILE_NAME;
use crate::ignore::{FilteredFileScanner, IgnoreChecker, IgnorePatterns};
use anyhow::Result;
use std::io::Write;
use tracing::info;

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing survived the filter; only the notice was printed
    NoFiles,
    /// The document was printed with this many blocks
    Combined { files: usize },
}

/// Execute one run, writing all user-facing output to `out`
pub fn execute<W: Write>(options: &RunOptions, out: &mut W) -> Result<RunOutcome> {
    let root = options.root();
    if !root.is_dir() {
        return Err(PrlistError::invalid_directory(options.directory.clone()).into());
    }

    let patterns = IgnorePatterns::load(root)?;
    write_pattern_summary(out, &patterns)?;

    let scan = FilteredFileScanner::new(IgnoreChecker::new(patterns)).scan(root);
    info!(
        survivors = scan.files.len(),
        ignored = scan.ignored.len(),
        "Scan complete"
    );

    if scan.files.is_empty() {
        writeln!(
            out,
            "No files found in '{}' (or all files are ignored)",
            options.directory.display()
        )?;
        return Ok(RunOutcome::NoFiles);
    }

    let document = Combiner::new(&options.directory).combine(&scan.files);
    writeln!(out, "{}", document)?;
    out.flush()?;

    Ok(RunOutcome::Combined {
        files: scan.files.len(),
    })
}

/// Print the active patterns, or a notice that there are none
pub fn write_pattern_summary<W: Write>(out: &mut W, patterns: &IgnorePatterns) -> Result<()> {
    writeln!(out, "Ignoring patterns:")?;
    if patterns.is_empty() {
        writeln!(
            out,
            "  None (no {} file found or file is empty)",
            IGNORE_FILE_NAME
        )?;
    } else {
        for pattern in patterns.iter() {
            writeln!(out, "  - {}", pattern.original)?;
        }
    }
    writeln!(out)?;
    Ok(())
}
