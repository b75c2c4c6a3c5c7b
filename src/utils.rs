/// Utility functions for user interaction and common operations.
use crate::error::Result;
use crate::storage::constants::CONFIRM_PREVIEW_LIMIT;
use crate::storage::utils::path::display_object_path;
use std::io::{self, BufRead, Write};

/// Prompt user for confirmation before deleting objects.
pub fn confirm_deletion(bucket: &str, paths: &[String], force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    let stdin = io::stdin();
    confirm_with(bucket, paths, &mut stdin.lock(), &mut io::stdout())
}

fn confirm_with<R: BufRead, W: Write>(
    bucket: &str,
    paths: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    writeln!(output, "About to delete {} object(s):", paths.len())?;
    for path in paths.iter().take(CONFIRM_PREVIEW_LIMIT) {
        writeln!(output, "  {}", display_object_path(bucket, path))?;
    }
    if paths.len() > CONFIRM_PREVIEW_LIMIT {
        writeln!(output, "  ... and {} more", paths.len() - CONFIRM_PREVIEW_LIMIT)?;
    }

    write!(output, "Continue? (y/N): ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}
