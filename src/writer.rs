//! Blocklist output writing.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::OusthostError;

/// Write the sorted hostname list to `path`, one hostname per line, joined
/// with a single newline (no trailing newline after the last entry).
///
/// The write is atomic: content goes to a tempfile in the target directory
/// and is renamed over the destination, so a crash mid-write never leaves a
/// truncated blocklist behind. An existing file at `path` is overwritten.
pub fn write_blocklist(path: &Path, hostnames: &[String]) -> Result<(), OusthostError> {
    let content = hostnames.join("\n");

    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file =
        NamedTempFile::new_in(parent_dir).map_err(|e| OusthostError::write(path, e))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| OusthostError::write(path, e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| OusthostError::write(path, e))?;

    temp_file
        .persist(path)
        .map_err(|e| OusthostError::write(path, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hostnames(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_write_joined_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.blocklist");

        write_blocklist(&path, &hostnames(&["a.example", "b.example"])).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a.example\nb.example");
    }

    #[test]
    fn test_write_no_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.blocklist");

        write_blocklist(&path, &hostnames(&["only.example"])).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "only.example");
    }

    #[test]
    fn test_write_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.blocklist");

        write_blocklist(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.blocklist");

        std::fs::write(&path, "stale content\n").unwrap();
        write_blocklist(&path, &hostnames(&["fresh.example"])).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "fresh.example");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.blocklist");

        let result = write_blocklist(&path, &hostnames(&["a.example"]));
        assert!(matches!(result, Err(OusthostError::Write { .. })));
    }

    #[test]
    fn test_write_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.blocklist");
        let list = hostnames(&["a.example", "b.example", "c.example"]);

        write_blocklist(&path, &list).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_blocklist(&path, &list).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }
}
