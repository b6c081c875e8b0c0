//! Line reassembly for chunked JSON-Lines input.
//!
//! Stream chunks arrive at arbitrary boundaries: a message line may span
//! several chunks or share one chunk with its neighbors. The reassembler
//! buffers the unterminated tail and hands back completed lines in order.

/// Accumulates stream chunks and yields newline-terminated lines.
///
/// Content-agnostic: blank-line filtering is the caller's concern. State
/// lives in the instance, so one reassembler must see the whole stream.
#[derive(Debug, Default)]
pub struct LineReassembler {
    buffer: String,
}

impl LineReassembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `chunk` and return every line it completed, in order.
    ///
    /// The segment after the last newline (possibly empty) is retained as
    /// the start of the next line.
    pub fn feed(&mut self, chunk: &str) -> Vec<String> {
        self.buffer.push_str(chunk);

        let Some(last_newline) = self.buffer.rfind('\n') else {
            return Vec::new();
        };

        let rest = self.buffer.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.buffer, rest);
        complete
            .split_terminator('\n')
            .map(str::to_string)
            .collect()
    }

    /// The buffered remainder that has not seen its newline yet.
    pub fn pending(&self) -> &str {
        &self.buffer
    }
}
