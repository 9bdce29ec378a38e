//! Splitter - divides transcript text into overlapping, boundary-aware windows
//!
//! Windows are counted in characters, matching how the generation model's
//! input budget is configured. Each window prefers to end just after a
//! sentence boundary found in its trailing region; when none exists the
//! window is cut hard at `max_size`.

mod boundary;
#[cfg(test)]
mod tests;

use crate::config::SplitConfig;
use crate::types::Segment;

/// Split text into ordered segments no longer than `config.max_size()`
///
/// Consecutive segments share `config.overlap()` characters of context, so
/// any fact near a cut point appears whole in at least one segment. Text
/// that already fits one window comes back as a single trimmed segment.
pub fn split_text(text: &str, config: &SplitConfig) -> Vec<Segment> {
    // Byte offset of every character, so window math stays in character
    // space while slicing stays on UTF-8 boundaries.
    let char_offsets: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
    let total = char_offsets.len();

    let byte_at = |char_idx: usize| {
        if char_idx >= total {
            text.len()
        } else {
            char_offsets[char_idx]
        }
    };

    if total <= config.max_size() {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        return vec![Segment {
            text: trimmed.to_string(),
            start: 0,
            end: total,
        }];
    }

    let mut segments = Vec::new();
    let mut start = 0usize;

    while start < total {
        let mut end = (start + config.max_size()).min(total);
        if end < total {
            if let Some(cut) =
                boundary::rightmost_break(text, &char_offsets, start, end, config.boundary_window())
            {
                end = cut;
            }
        }

        let trimmed = text[byte_at(start)..byte_at(end)].trim();
        if !trimmed.is_empty() {
            segments.push(Segment {
                text: trimmed.to_string(),
                start,
                end,
            });
        }

        if end >= total {
            break;
        }
        // The cursor must always advance, even if a boundary cut lands
        // inside the overlap region.
        start = end.saturating_sub(config.overlap()).max(start + 1);
    }

    segments
}
