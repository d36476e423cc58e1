//! File I/O utilities for line-oriented ledger files
//!
//! Appends go straight to the end of the file; full rewrites go through a
//! temp file and a rename so a crash leaves either the old or the new file.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::DaybookError;

/// Read every line of a file, returning an empty list if it doesn't exist
///
/// Lines are decoded one at a time; invalid UTF-8 in one line becomes
/// `U+FFFD` in that line only.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DaybookError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let bytes = fs::read(path)
        .map_err(|e| DaybookError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let mut lines: Vec<String> = bytes
        .split(|b| *b == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect();

    // split() yields a trailing empty piece after the final newline
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }

    Ok(lines)
}

/// Append one newline-terminated line, creating the file and its parent
/// directory if needed
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), DaybookError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let needs_newline = !ends_with_newline(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            DaybookError::SaveFailed(format!("Failed to open {}: {}", path.display(), e))
        })?;

    let mut buf = String::with_capacity(line.len() + 2);
    if needs_newline {
        buf.push('\n');
    }
    buf.push_str(line);
    if !line.ends_with('\n') {
        buf.push('\n');
    }

    file.write_all(buf.as_bytes())
        .map_err(|e| DaybookError::SaveFailed(format!("Failed to write {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| DaybookError::SaveFailed(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Replace the file's contents with `lines` atomically (write to temp, then
/// rename). An empty slice leaves an empty file behind.
pub fn write_lines_atomic<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<(), DaybookError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    // Same directory as the target so the rename stays atomic
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| DaybookError::SaveFailed(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.trim_end_matches(['\n', '\r']))
            .map_err(|e| DaybookError::SaveFailed(format!("Failed to write temp file: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| DaybookError::SaveFailed(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| DaybookError::SaveFailed(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        DaybookError::SaveFailed(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), DaybookError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DaybookError::SaveFailed(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// True for a missing or empty file, or one whose last byte is `\n`
fn ends_with_newline(path: &Path) -> Result<bool, DaybookError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(true),
        Err(e) => {
            return Err(DaybookError::SaveFailed(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let len = file.metadata().map(|m| m.len()).unwrap_or(0);
    if len == 0 {
        return Ok(true);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))
        .and_then(|_| file.read_exact(&mut last))
        .map_err(|e| DaybookError::SaveFailed(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(last[0] == b'\n')
}
