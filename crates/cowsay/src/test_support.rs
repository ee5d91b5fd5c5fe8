//! Test support utilities for cowsay.
//!
//! This module provides fixtures and helpers that are useful for testing
//! templates, bubbles and cow packs, but are not part of the stable API.

use std::io::{Cursor, Write};

use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::{CowError, Result};

/// The classic default cowfile.
pub const SAMPLE_COW: &str = r#"##
## The default cow.
##
$the_cow = <<EOC;
        $thoughts   ^__^
         $thoughts  ($eyes)\\_______
            (__)\\       )\\/\\
             $tongue ||----w |
                ||     ||
EOC
"#;

/// Column widths of the text rows of a bubble, borders excluded.
///
/// A well formed bubble yields the same width for every row.
pub fn interior_widths(bubble: &str) -> Vec<usize> {
    let rows: Vec<&str> = bubble.lines().collect();
    if rows.len() < 3 {
        return Vec::new();
    }
    rows[1..rows.len() - 1]
        .iter()
        .map(|row| row.chars().count())
        .collect()
}

/// Builds an in-memory zip cow pack from `(file name, content)` entries.
pub fn cow_pack(entries: &[(&str, &str)]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, content) in entries {
        writer
            .start_file(*name, options)
            .map_err(|e| CowError::Archive(format!("zip write error: {e}")))?;
        writer.write_all(content.as_bytes())?;
    }
    let cursor = writer
        .finish()
        .map_err(|e| CowError::Archive(format!("zip finish error: {e}")))?;
    Ok(cursor.into_inner())
}
