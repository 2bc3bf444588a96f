//! Forward cursor over an extracted chunk list.

use crate::chunk::Chunk;
use crate::error::{Error, Result};

/// Reads chunks in order by increasing index.
///
/// Message layouts have a fixed or lower-bounded chunk count, so running out
/// while reading one is always an error and never a clean end of data.
#[derive(Debug, Clone)]
pub struct ChunkReader<'c> {
    chunks: &'c [Chunk],
    at: usize,
}

impl<'c> ChunkReader<'c> {
    /// Constructs a new instance positioned at the first chunk.
    pub fn new(chunks: &'c [Chunk]) -> Self {
        Self { chunks, at: 0 }
    }

    /// Returns the total number of chunks, consumed or not.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns if there are no chunks at all.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns the unread chunks, which might be empty.
    pub fn rest(&self) -> &'c [Chunk] {
        &self.chunks[self.at..]
    }

    /// Reads the next chunk.
    pub fn next_chunk(&mut self) -> Result<&'c Chunk> {
        let chunk = self.chunks.get(self.at).ok_or(Error::ParsingEndedEarly)?;
        self.at += 1;
        Ok(chunk)
    }
}
