//! Incremental decoder for the `text/event-stream` wire format.
//!
//! Network chunks may split events (and even UTF-8 sequences) at
//! arbitrary byte boundaries, so the decoder buffers a partial line
//! across [`SseDecoder::push`] calls and only emits the accumulated
//! `data` payload once a blank line terminates the event.

/// Streaming decoder for SSE frames.
///
/// Feed raw transport chunks with [`push`](Self::push); each call
/// returns the `data` payloads of every event completed by that chunk.
/// Multi-line `data:` fields are joined with `\n` per the SSE spec;
/// comment lines (leading `:`) and non-`data` fields (`event:`, `id:`,
/// `retry:`) are ignored. Lines that are not valid UTF-8 are logged
/// and dropped without affecting the rest of the stream.
#[derive(Debug, Default)]
pub struct SseDecoder {
    /// Bytes of the current, not-yet-terminated line.
    partial: Vec<u8>,
    /// `data` lines accumulated for the event in progress.
    data: Vec<String>,
}

impl SseDecoder {
    /// Creates an empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes a transport chunk and returns completed event payloads.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut completed = Vec::new();
        for &byte in chunk {
            if byte == b'\n' {
                let line = std::mem::take(&mut self.partial);
                if let Some(payload) = self.finish_line(&line) {
                    completed.push(payload);
                }
            } else {
                self.partial.push(byte);
            }
        }
        completed
    }

    /// Processes one complete line. Returns a payload when the line is
    /// the blank terminator of an event with accumulated data.
    fn finish_line(&mut self, line: &[u8]) -> Option<String> {
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        if line.is_empty() {
            if self.data.is_empty() {
                return None;
            }
            return Some(std::mem::take(&mut self.data).join("\n"));
        }

        let Ok(text) = std::str::from_utf8(line) else {
            tracing::warn!("discarding non-UTF-8 line on event stream");
            return None;
        };

        if text.starts_with(':') {
            // Keep-alive comment.
            return None;
        }

        if let Some(value) = text.strip_prefix("data:") {
            self.data
                .push(value.strip_prefix(' ').unwrap_or(value).to_string());
        } else if text == "data" {
            self.data.push(String::new());
        }
        // event:, id:, retry: and unknown fields are ignored.

        None
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn single_event_in_one_chunk() {
        let mut dec = SseDecoder::new();
        let out = dec.push(b"data: {\"type\":\"shift.updated\"}\n\n");
        assert_eq!(out, vec!["{\"type\":\"shift.updated\"}".to_string()]);
    }

    #[test]
    fn event_split_across_chunks() {
        let mut dec = SseDecoder::new();
        assert!(dec.push(b"data: {\"ty").is_empty());
        assert!(dec.push(b"pe\":\"a\"}").is_empty());
        let out = dec.push(b"\n\n");
        assert_eq!(out, vec!["{\"type\":\"a\"}".to_string()]);
    }

    #[test]
    fn multiple_events_in_one_chunk() {
        let mut dec = SseDecoder::new();
        let out = dec.push(b"data: one\n\ndata: two\n\n");
        assert_eq!(out, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn multi_line_data_joined_with_newline() {
        let mut dec = SseDecoder::new();
        let out = dec.push(b"data: first\ndata: second\n\n");
        assert_eq!(out, vec!["first\nsecond".to_string()]);
    }

    #[test]
    fn comments_and_other_fields_ignored() {
        let mut dec = SseDecoder::new();
        let out = dec.push(b": keep-alive\nevent: message\nid: 3\ndata: x\n\n");
        assert_eq!(out, vec!["x".to_string()]);
    }

    #[test]
    fn crlf_line_endings_tolerated() {
        let mut dec = SseDecoder::new();
        let out = dec.push(b"data: x\r\n\r\n");
        assert_eq!(out, vec!["x".to_string()]);
    }

    #[test]
    fn blank_lines_without_data_emit_nothing() {
        let mut dec = SseDecoder::new();
        assert!(dec.push(b"\n\n\n").is_empty());
    }

    #[test]
    fn invalid_utf8_line_dropped() {
        let mut dec = SseDecoder::new();
        let out = dec.push(b"data: \xff\xfe\ndata: ok\n\n");
        assert_eq!(out, vec!["ok".to_string()]);
    }

    #[test]
    fn data_without_colon_is_empty_value() {
        let mut dec = SseDecoder::new();
        let out = dec.push(b"data\n\n");
        assert_eq!(out, vec![String::new()]);
    }
}
