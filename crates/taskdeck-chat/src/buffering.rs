use std::collections::VecDeque;

/// Byte buffer for line-based SSE parsing.
///
/// Bytes are only converted to text once a full `\n`-terminated record is
/// present, so a multi-byte UTF-8 sequence split across network chunks
/// never hits a partial-character decode.
pub struct LineBuffer {
    buffer: VecDeque<u8>,
}

impl LineBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    /// Add bytes to the buffer
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes);
    }

    /// Extract the next complete line, stripping the trailing `\n` and any
    /// `\r` before it. Returns None until a full line is buffered.
    pub fn next_line(&mut self) -> Option<String> {
        let newline_pos = self.buffer.iter().position(|&b| b == b'\n')?;

        let mut line_bytes: Vec<u8> = self.buffer.drain(..=newline_pos).collect();
        line_bytes.pop();
        if line_bytes.last() == Some(&b'\r') {
            line_bytes.pop();
        }

        Some(String::from_utf8_lossy(&line_bytes).into_owned())
    }

    /// Reinsert a line at the front of the buffer, restoring its newline.
    /// Used when a would-be-complete record turns out to be truncated at a
    /// chunk boundary and must wait for more bytes.
    pub fn push_back_line(&mut self, line: &str) {
        self.buffer.push_front(b'\n');
        for &b in line.as_bytes().iter().rev() {
            self.buffer.push_front(b);
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
