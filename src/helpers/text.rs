/// Truncates to at most `max_chars` characters, marking the cut with an ellipsis.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}…", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// 1-based index of the first line containing `needle`, or 1 when no line does.
pub fn find_line_containing(code: &str, needle: &str) -> u32 {
    code.split('\n')
        .position(|line| line.contains(needle))
        .map(|index| index as u32 + 1)
        .unwrap_or(1)
}

/// Number of `\n`-separated segments; a trailing newline opens one more (empty) line.
pub fn line_count(code: &str) -> usize {
    code.split('\n').count()
}
