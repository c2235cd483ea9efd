/// Format a byte count as a human-readable size string (e.g., "8 KB", "1 MB").
///
/// Uses exact integer division. Values that aren't clean multiples of KB/MB
/// are shown in bytes.
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1024 * 1024 && bytes.is_multiple_of(1024 * 1024) {
        format!("{} MB", bytes / (1024 * 1024))
    } else if bytes >= 1024 && bytes.is_multiple_of(1024) {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Name of the image written for tile `index` (0-based) in directory mode.
pub fn tile_file_name(index: usize) -> String {
    format!("tile_{:04}.png", index + 1)
}
