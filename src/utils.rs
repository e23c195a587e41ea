//! Small formatting helpers

/// Number of bytes shown in a report's hex preview
pub const DEFAULT_PREVIEW_BYTES: usize = 20;

/// Formats up to `max_bytes` leading bytes as space-separated lowercase hex
pub fn hex_preview(data: &[u8], max_bytes: usize) -> String {
    data.iter()
        .take(max_bytes)
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a byte count for humans, e.g. `1.50 KiB`
pub fn format_bytes(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_zero_padded_lowercase() {
        assert_eq!(hex_preview(&[0x0A, 0xFF, 0x00], 20), "0a ff 00");
    }

    #[test]
    fn preview_stops_at_limit() {
        let data: Vec<u8> = (0..64).collect();
        let preview = hex_preview(&data, DEFAULT_PREVIEW_BYTES);
        assert_eq!(preview.split(' ').count(), 20);
        assert!(preview.ends_with("13"));
    }

    #[test]
    fn short_buffers_dump_what_they_have() {
        assert_eq!(hex_preview(&[0x25, 0x50], 20), "25 50");
        assert_eq!(hex_preview(&[], 20), "");
    }
}
