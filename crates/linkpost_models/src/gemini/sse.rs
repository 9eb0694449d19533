//! Minimal server-sent events framing for `alt=sse` streams.

/// Accumulates raw bytes and splits them into complete event payloads.
#[derive(Debug, Default)]
pub struct SseBuffer {
    buffer: Vec<u8>,
}

impl SseBuffer {
    /// Feed bytes, returning the `data` payload of every completed event.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.extend(bytes.iter().copied().filter(|b| *b != b'\r'));

        let mut events = Vec::new();
        while let Some(end) = find_boundary(&self.buffer) {
            let block: Vec<u8> = self.buffer.drain(..end + 2).collect();
            if let Some(payload) = data_payload(&block[..end]) {
                events.push(payload);
            }
        }
        events
    }

    /// Payload of a trailing event that was not terminated by a blank line.
    pub fn finish(self) -> Option<String> {
        data_payload(&self.buffer)
    }
}

fn find_boundary(buffer: &[u8]) -> Option<usize> {
    buffer.windows(2).position(|window| window == b"\n\n")
}

fn data_payload(block: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(block);
    let data: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(str::trim_start)
        .collect();

    if data.is_empty() {
        return None;
    }

    let payload = data.join("\n");
    if payload.trim().is_empty() || payload.trim() == "[DONE]" {
        None
    } else {
        Some(payload)
    }
}
