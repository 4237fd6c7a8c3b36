/// Marker appended to text cut by [`truncate_with_marker`].
pub const TRUNCATION_MARKER: &str = "\n... (обрезано)";

/// Обрезает текст до `max_chars` символов и добавляет пометку об обрезке.
///
/// Длина считается в символах, а не в байтах, поэтому кириллица
/// никогда не режется посреди UTF-8 последовательности.
///
/// # Example
///
/// ```
/// use spotdora::core::utils::truncate_with_marker;
///
/// assert_eq!(truncate_with_marker("short", 10), "short");
/// assert_eq!(truncate_with_marker("abcdef", 3), "abc\n... (обрезано)");
/// ```
pub fn truncate_with_marker(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// Returns the final path component as a string, for captions.
pub fn file_base_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
