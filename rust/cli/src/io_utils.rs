//! File I/O utilities for reading JSONL score logs.
//!
//! - Reading text files with automatic .zst decompression
//! - Collecting score log files below a directory
//!
//! ## Compressed File Support
//!
//! The `read_text_auto` function automatically detects and decompresses .zst
//! (Zstandard) compressed files based on the file extension.

use std::path::{Path, PathBuf};

/// Read text file with automatic .zst decompression detection.
///
/// If the path ends with ".zst", the file is decompressed using Zstandard.
/// A UTF-8 BOM is stripped if present.
///
/// # Returns
///
/// * `Ok(String)` - File contents as UTF-8 string
/// * `Err(String)` - I/O error, decompression error, or UTF-8 conversion error
///
/// # Example
///
/// ```rust,no_run
/// # use farkle_cli::io_utils::read_text_auto;
///
/// let plain = read_text_auto("scores.jsonl").unwrap();
/// let compressed = read_text_auto("scores.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        // Read entire compressed file then decompress; more portable across platforms
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Collects `.jsonl` and `.jsonl.zst` files below `dir`, sorted by path.
///
/// Unreadable subdirectories are skipped.
pub fn collect_jsonl_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        let rd = match std::fs::read_dir(&d) {
            Ok(v) => v,
            Err(_) => continue,
        };
        for e in rd.filter_map(Result::ok) {
            let p = e.path();
            if p.is_dir() {
                stack.push(p);
            } else if let Some(fname) = p.file_name().and_then(|f| f.to_str())
                && (fname.ends_with(".jsonl") || fname.ends_with(".jsonl.zst"))
            {
                files.push(p);
            }
        }
    }
    files.sort();
    files
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
