// Snapshot management for time-travel stepping

use crate::interpreter::state::ExecState;
use std::io::{self, Write};

/// Output sink that forwards to a real writer.
///
/// A recording console also keeps a transcript of everything written. Only
/// the first `visible` bytes are shown, so history can rewind the transcript
/// without copying it into every snapshot.
#[derive(Debug)]
pub struct Console<W> {
    inner: W,
    transcript: Option<String>,
    visible: usize,
}

impl<W: Write> Console<W> {
    /// Console that forwards output and keeps nothing
    pub fn new(inner: W) -> Self {
        Console {
            inner,
            transcript: None,
            visible: 0,
        }
    }

    /// Console that also records a transcript
    pub fn recording(inner: W) -> Self {
        Console {
            inner,
            transcript: Some(String::new()),
            visible: 0,
        }
    }

    /// Output written up to the current history position; empty when not recording
    pub fn transcript(&self) -> &str {
        self.transcript
            .as_deref()
            .map_or("", |transcript| &transcript[..self.visible])
    }

    /// Length of the visible transcript in bytes
    pub fn transcript_len(&self) -> usize {
        self.visible
    }

    /// Show only the first `len` bytes when restoring a snapshot
    pub(crate) fn rewind_transcript(&mut self, len: usize) {
        if let Some(transcript) = &self.transcript {
            self.visible = len.min(transcript.len());
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for Console<W> {
    /// Forwards the whole buffer, so a recorded character is never split
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_all(buf)?;
        if let Some(transcript) = self.transcript.as_mut() {
            // Output after a rewind replaces what followed
            transcript.truncate(self.visible);
            transcript.push_str(&String::from_utf8_lossy(buf));
            self.visible = transcript.len();
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Interpreter state captured before an instruction executes
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub state: ExecState,
    /// Bytes of output written before this snapshot
    pub output_len: usize,
    /// Number of instructions executed before this snapshot
    pub step: usize,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        let tape = self.state.tape().len() * std::mem::size_of::<i64>();
        let frames = self.state.loop_frames().len() * 2 * std::mem::size_of::<usize>();

        // Program text is shared between snapshots and not counted
        std::mem::size_of::<Self>() + tape + frames
    }
}

/// Execution history with a memory budget
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history.
    ///
    /// Fails with the projected usage when the budget would be exceeded.
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), usize> {
        let snapshot_size = snapshot.estimated_size();
        let projected = self.current_memory + snapshot_size;

        if projected > self.max_memory {
            return Err(projected);
        }

        self.current_memory = projected;
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
