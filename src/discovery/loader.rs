use std::fs;
use std::path::Path;

use crate::core::constants::files::COMMENT_PREFIX;
use crate::core::error::Result;
use crate::reporting::logging;
use crate::ui::output;

/// Load a newline separated list file.
///
/// Lines are trimmed; blank lines and `#` comments are dropped and the
/// remaining order is kept. A missing file is not an error: a warning is
/// shown and an empty list returned so the caller can abort gracefully.
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn load_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        output::print_warning(&format!("File not found: {}", path.display()));
        logging::log_warning(&format!("List file '{}' does not exist", path.display()));
        return Ok(Vec::new());
    }

    let bytes = fs::read(path)?;
    let entries = parse_list_str(&String::from_utf8_lossy(&bytes));
    logging::log_list_loaded(path, entries.len());
    Ok(entries)
}

/// Parse list content, keeping trimmed non-blank, non-comment lines.
pub fn parse_list_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .map(str::to_string)
        .collect()
}
