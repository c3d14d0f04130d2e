//! Fixed-size chunked reading.
//!
//! [`ChunkReader`] yields a reader's content as consecutive [`Bytes`] chunks
//! of [`CHUNK_SIZE`] bytes; only the final chunk may be shorter. An empty
//! source yields no chunks at all. The reader owns its source, so an open file
//! is closed as soon as the iterator is dropped, whether it ran to the end,
//! failed, or was abandoned early.

use std::io::{self, Read};

use bytes::Bytes;

/// Size of each streamed chunk in bytes.
pub const CHUNK_SIZE: usize = 4096;

/// Iterator over fixed-size chunks of a reader.
///
/// # Examples
///
/// ```
/// use mockstore_core::chunks::{ChunkReader, CHUNK_SIZE};
///
/// let data = vec![7u8; CHUNK_SIZE + 10];
/// let sizes: Vec<usize> = ChunkReader::new(data.as_slice())
///     .map(|chunk| chunk.unwrap().len())
///     .collect();
/// assert_eq!(sizes, vec![CHUNK_SIZE, 10]);
/// ```
#[derive(Debug)]
pub struct ChunkReader<R> {
    inner: R,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    /// Wrap a reader.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self { inner, done: false }
    }

    fn read_chunk(&mut self) -> io::Result<Bytes> {
        let mut buf = Vec::with_capacity(CHUNK_SIZE);
        (&mut self.inner)
            .take(CHUNK_SIZE as u64)
            .read_to_end(&mut buf)?;
        if buf.len() < CHUNK_SIZE {
            self.done = true;
        }
        Ok(Bytes::from(buf))
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = io::Result<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_chunk() {
            Ok(chunk) if chunk.is_empty() => None,
            Ok(chunk) => Some(Ok(chunk)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
