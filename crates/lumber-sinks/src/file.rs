//! File sink — the mandatory, append-only log file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lumber_core::{Record, Sink, SinkError, SinkFailures};

use crate::writer::{BackgroundWriter, SizeCeiling};

pub struct FileSink {
    path: PathBuf,
    writer: BackgroundWriter,
}

impl FileSink {
    /// Create the parent directory if needed and open `path` for appending.
    /// Any failure here is a startup error.
    pub fn open(path: &Path, max_size: u64, failures: Arc<SinkFailures>) -> Result<Self, SinkError> {
        let open_err = |source: std::io::Error| SinkError::Open {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(open_err)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(open_err)?;
        let writer = BackgroundWriter::spawn(
            "file",
            Box::new(file),
            failures,
            Some(SizeCeiling::new(max_size)),
        )?;
        tracing::debug!(path = %path.display(), max_size, "log file opened");
        Ok(Self {
            path: path.to_path_buf(),
            writer,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn name(&self) -> &'static str {
        "file"
    }

    fn write(&self, record: &Record<'_>) -> Result<(), SinkError> {
        self.writer.send(record.level, record.to_string())
    }

    fn flush(&self) -> Result<(), SinkError> {
        self.writer.flush()
    }
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
