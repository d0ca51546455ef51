//! Byte offset to line mapping for full-line regions

use super::RegionDescriptor;

/// Line start offsets of a source text
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first character of each line (always starts with 0)
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            starts,
            len: source.len(),
        }
    }

    /// Number of lines (an empty source has one empty line)
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// 0-based line containing `offset`; offsets past the end clamp to the last line
    pub fn line_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.len);
        match self.starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    /// Inclusive range of lines a region covers when snapped to full lines
    ///
    /// An end offset sitting exactly at a line start belongs to the line
    /// before it, since the region does not reach into that line.
    pub fn line_span(&self, region: &RegionDescriptor) -> (usize, usize) {
        let first = self.line_of(region.start);
        let last = if region.is_empty() {
            first
        } else {
            self.line_of(region.end - 1)
        };
        (first, last)
    }
}
