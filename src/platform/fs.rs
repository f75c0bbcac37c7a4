// PresetScrub - platform/fs.rs
//
// Loading and saving the target file.
//
// Saving never writes the target in place: content goes to a temporary
// file next to the real target (symlinks resolved) which is renamed over
// it once fully written. If anything fails, the temporary file is removed
// on drop and the original is left as it was.

use crate::util::error::{Result, ScrubError};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Read `path` and split it into lines, each keeping its terminator.
///
/// A trailing line without a newline is returned as-is. An empty file
/// yields no lines.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ScrubError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ScrubError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let lines = split_lines(&content);
    tracing::debug!(
        path = %path.display(),
        bytes = content.len(),
        lines = lines.len(),
        "Loaded target file"
    );
    Ok(lines)
}

/// Split after every `\n`. `\r\n` stays attached to its line.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_owned).collect()
}

/// Replace the contents of `path` with `lines` concatenated in order.
///
/// A symlinked target is followed: the file it points to is replaced and
/// the link itself is left in place.
pub fn save_lines(path: &Path, lines: &[String]) -> Result<()> {
    let write_err = |source: io::Error| ScrubError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(write_err)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tracing::debug!(
        target_path = %target.display(),
        temp = %tmp.path().display(),
        "Writing filtered content to temporary file"
    );

    {
        let mut writer = io::BufWriter::new(tmp.as_file_mut());
        for line in lines {
            writer.write_all(line.as_bytes()).map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;

    // The replacement inherits the original's mode rather than the 0600
    // that temp files are created with.
    match std::fs::metadata(&target) {
        Ok(meta) => {
            std::fs::set_permissions(tmp.path(), meta.permissions()).map_err(write_err)?;
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(write_err(e)),
    }

    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    tracing::debug!(path = %target.display(), lines = lines.len(), "Target file replaced");
    Ok(())
}

/// The real file behind `path`, with every symlink resolved.
///
/// A path that does not exist yet is returned unchanged.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match std::fs::canonicalize(path) {
        Ok(resolved) => {
            if resolved.as_path() != path {
                tracing::debug!(
                    path = %path.display(),
                    resolved = %resolved.display(),
                    "Resolved target path"
                );
            }
            Ok(resolved)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}
