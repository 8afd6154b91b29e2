use std::fs;
use std::path::Path;

use crate::offset::OFFSET_SPECS;

/// offset trees shown by `shallow_listing`
pub const LISTED_OFFSETS: usize = 5;

/// files shown per listed offset tree
pub const LISTED_FILES: usize = 3;

/// Render the top level of the first few offset trees below `output_base_dir`, one
/// line per entry. Only files directly inside each offset directory are shown.
pub fn shallow_listing(output_base_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    for spec in OFFSET_SPECS.iter().take(LISTED_OFFSETS) {
        let name = spec.name();
        lines.push(format!("  {name}/"));

        let mut files: Vec<String> = match fs::read_dir(output_base_dir.join(&name)) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => continue,
        };
        files.sort();

        for file in files.iter().take(LISTED_FILES) {
            lines.push(format!("    {file}"));
        }
        if files.len() > LISTED_FILES {
            lines.push(format!("    ... and {} more files", files.len() - LISTED_FILES));
        }
    }

    lines
}
