use std::{fs::{self, File}, io::Write, path::{Path, PathBuf}};

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

/// Create the directory if it doesn’t exist; error if a non-directory exists there.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            bail!("Path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Write-then-rename wrapper for atomic document outputs.
pub(crate) struct PendingWrite {
    target: PathBuf,
    tmp: Option<NamedTempFile>,
}

impl PendingWrite {
    /// Open a temporary file next to `target`. Refuses to clobber an existing file unless `force`.
    pub(crate) fn open(target: &Path, force: bool) -> Result<Self> {
        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ensure_dir_exists(parent)?;

        if !force && target.exists() {
            bail!("Refusing to overwrite existing file: {} (use --force)", target.display());
        }

        let tmp = NamedTempFile::new_in(parent)
            .with_context(|| format!("create temp file in {}", parent.display()))?;

        Ok(Self { target: target.to_path_buf(), tmp: Some(tmp) })
    }

    /// Flush and move the temporary file into place.
    pub(crate) fn finalize(mut self) -> Result<()> {
        let Some(mut tmp) = self.tmp.take() else { bail!("write to {} already finalized", self.target.display()) };
        tmp.flush()?;
        tmp.as_file().sync_all().ok(); // best-effort fsync file
        tmp.persist(&self.target)
            .with_context(|| format!("rename to {}", self.target.display()))?;
        if let Some(dir) = self.target.parent() {
            let _ = File::open(dir).and_then(|f| f.sync_all());
        }
        Ok(())
    }

    fn file(&mut self) -> std::io::Result<&mut NamedTempFile> {
        self.tmp.as_mut()
            .ok_or_else(|| std::io::Error::other("write after finalize"))
    }
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file()?.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_moves_content_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("map.svg");

        let mut sink = PendingWrite::open(&target, false).unwrap();
        write!(sink, "<svg/>").unwrap();
        assert!(!target.exists());
        sink.finalize().unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "<svg/>");
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("map.svg");
        fs::write(&target, "old").unwrap();

        assert!(PendingWrite::open(&target, false).is_err());

        let mut sink = PendingWrite::open(&target, true).unwrap();
        write!(sink, "new").unwrap();
        sink.finalize().unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn ensure_dir_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, "").unwrap();
        assert!(ensure_dir_exists(&file).is_err());
        assert!(ensure_dir_exists(&dir.path().join("a/b")).is_ok());
    }
}
