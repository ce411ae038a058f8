// crates/locate_marker/src/lib.rs

/// Returns the byte offset of the first occurrence of `marker` within `haystack`,
/// scanning left to right, or `None` if the marker does not occur.
///
/// The search is a literal byte comparison; no encoding is assumed. An empty
/// marker matches at offset 0.
///
/// # Arguments
///
/// * `haystack` - The buffer to search.
/// * `marker` - The literal byte sequence to locate.
pub fn locate_marker(haystack: &[u8], marker: &[u8]) -> Option<usize> {
    if marker.is_empty() {
        return Some(0);
    }
    if haystack.len() < marker.len() {
        return None;
    }
    haystack
        .windows(marker.len())
        .position(|window| window == marker)
}
