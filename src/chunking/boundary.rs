//! Sentence-boundary search within the trailing region of a window

/// Find the rightmost sentence break in the last `boundary_window` characters
/// of `[window_start, window_end)` and return the cut position just after it.
///
/// Break markers are `.`, `!`, `?` and a blank-line break (two consecutive
/// newlines). A marker sitting exactly at the start of the scan region does
/// not count; the caller falls back to a hard cut in that case.
pub(super) fn rightmost_break(
    text: &str,
    char_offsets: &[usize],
    window_start: usize,
    window_end: usize,
    boundary_window: usize,
) -> Option<usize> {
    let scan_start = window_end.saturating_sub(boundary_window).max(window_start);
    let byte_from = char_offsets[scan_start];
    let byte_to = if window_end >= char_offsets.len() {
        text.len()
    } else {
        char_offsets[window_end]
    };

    let region: Vec<char> = text[byte_from..byte_to].chars().collect();
    let mut last_break = None;
    for (idx, &ch) in region.iter().enumerate() {
        let is_break = matches!(ch, '.' | '!' | '?')
            || (ch == '\n' && region.get(idx + 1) == Some(&'\n'));
        if is_break {
            last_break = Some(idx);
        }
    }

    match last_break {
        Some(rel) if rel > 0 => Some(scan_start + rel + 1),
        _ => None,
    }
}
