use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{AppError, Result};
use crate::game::Snapshot;

/// Writes every published snapshot as one line of JSON.
#[derive(Debug)]
pub struct SnapshotTrace<W: Write> {
    writer: W,
    written: u64,
}

impl SnapshotTrace<BufWriter<File>> {
    /// Creates (or truncates) a trace file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| AppError::TraceFile {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SnapshotTrace<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn record(&mut self, snapshot: &Snapshot) -> Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of snapshots recorded so far.
    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
