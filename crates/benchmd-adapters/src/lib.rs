//! Std adapters for benchmd.
//!
//! In clean-arch terms: this is where we touch the world. Both reporters only
//! ever read, so the seam is a small read-only filesystem trait.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("resolve {}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait SourceReader {
    /// Raw file contents. Used for logs that may be binary.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AdapterError>;

    fn exists(&self, path: &Path) -> bool;

    /// File contents decoded as UTF-8; invalid sequences become U+FFFD.
    fn read_text(&self, path: &Path) -> Result<String, AdapterError> {
        let bytes = self.read_bytes(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Absolute directory holding `path`.
    fn report_dir(&self, path: &Path) -> Result<PathBuf, AdapterError> {
        absolute_parent(path)
    }
}

#[derive(Debug, Default, Clone)]
pub struct StdSourceReader;

impl SourceReader for StdSourceReader {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AdapterError> {
        let bytes = fs::read(path).map_err(|source| AdapterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input");
        Ok(bytes)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Absolute directory containing `path`.
///
/// The path is made absolute against the current directory and then
/// normalized lexically: `.` is dropped and `..` pops the previous component.
/// Symlinks are not resolved, so `logs/run/simulation.log` becomes
/// `$PWD/logs/run` and `../run/simulation.log` becomes the sibling `run`.
pub fn absolute_parent(path: &Path) -> Result<PathBuf, AdapterError> {
    let abs = std::path::absolute(path).map_err(|source| AdapterError::Resolve {
        path: path.to_path_buf(),
        source,
    })?;
    let abs = normalize_lexically(&abs);
    Ok(abs
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| abs.clone()))
}

// `..` at the root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_bytes_and_lossy_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("simulation.log");
        fs::write(&path, b"ok\xffthen").unwrap();

        let reader = StdSourceReader;
        assert_eq!(reader.read_bytes(&path).unwrap(), b"ok\xffthen");
        assert_eq!(reader.read_text(&path).unwrap(), "ok\u{fffd}then");
        assert!(reader.exists(&path));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.log");

        let err = StdSourceReader.read_bytes(&path).unwrap_err();
        assert!(matches!(err, AdapterError::Read { .. }));
        assert!(err.to_string().starts_with("read "));
        assert!(err.to_string().contains("nope.log"));
        assert!(!StdSourceReader.exists(&path));
    }

    #[test]
    fn absolute_parent_is_absolute() {
        let dir = absolute_parent(Path::new("reports/run-1/simulation.log")).unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("reports/run-1"));
    }

    #[test]
    fn absolute_parent_of_bare_file_is_cwd() {
        let dir = absolute_parent(Path::new("simulation.log")).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap());
    }

    #[test]
    fn absolute_parent_resolves_parent_dir() {
        let cwd = std::env::current_dir().unwrap();
        let dir = absolute_parent(Path::new("../run/simulation.log")).unwrap();

        assert_eq!(dir, cwd.parent().unwrap_or(&cwd).join("run"));
        assert!(!dir.components().any(|c| c == Component::ParentDir));
    }

    #[test]
    fn absolute_parent_drops_dot_segments() {
        let cwd = std::env::current_dir().unwrap();
        let dir = absolute_parent(Path::new("a/./b/../simulation.log")).unwrap();

        assert_eq!(dir, cwd.join("a"));
        assert!(!dir.components().any(|c| c == Component::CurDir));
    }

    #[test]
    fn parent_dir_at_root_stays_at_root() {
        let root = Path::new("/");
        assert_eq!(normalize_lexically(&root.join("../x")), root.join("x"));
    }
}
