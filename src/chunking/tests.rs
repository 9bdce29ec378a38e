use super::split_text;
use crate::config::SplitConfig;

fn config(max_size: usize, overlap: usize) -> SplitConfig {
    SplitConfig::new(max_size, overlap, 200).unwrap()
}

/// Roughly 20k characters of sentence-shaped transcript text
fn long_transcript() -> String {
    let sentence = "The team reviewed the deployment checklist and agreed on the rollout order. ";
    sentence.repeat(260)
}

#[test]
fn short_text_returns_single_trimmed_segment() {
    let segments = split_text("  hello world  ", &config(6000, 500));
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "hello world");
    assert_eq!((segments[0].start, segments[0].end), (0, 15));
}

#[test]
fn text_exactly_at_max_size_is_not_split() {
    let text = "a".repeat(100);
    let segments = split_text(&text, &config(100, 10));
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, text);
}

#[test]
fn whitespace_only_text_produces_no_segments() {
    assert!(split_text("   \n\n  ", &config(6000, 500)).is_empty());
}

#[test]
fn long_text_produces_expected_segment_count() {
    let text = long_transcript();
    assert!(text.chars().count() > 19_000);

    let segments = split_text(&text, &config(6000, 500));

    // Boundary search may shift the count by one around the nominal value.
    assert!(
        (4..=5).contains(&segments.len()),
        "expected 4-5 segments, got {}",
        segments.len()
    );
    for segment in &segments {
        assert!(segment.text.chars().count() <= 6000);
        assert!(!segment.text.is_empty());
    }
}

#[test]
fn windows_cover_the_full_text_with_overlap() {
    let text = long_transcript();
    let total = text.chars().count();
    let overlap = 500;
    let segments = split_text(&text, &config(6000, overlap));

    assert_eq!(segments[0].start, 0);
    assert_eq!(segments.last().unwrap().end, total);
    for pair in segments.windows(2) {
        // Each window starts exactly `overlap` characters before its
        // predecessor ends, so the covered ranges leave no gap.
        assert_eq!(pair[1].start, pair[0].end - overlap);
    }
}

#[test]
fn windows_prefer_sentence_boundaries() {
    let text = long_transcript();
    let segments = split_text(&text, &config(6000, 500));

    // Every non-final window should have found a sentence end in its
    // trailing region; the source text ends each sentence with ". ".
    for segment in &segments[..segments.len() - 1] {
        assert!(
            segment.text.ends_with('.'),
            "segment ending {:?} is not a sentence boundary",
            &segment.text[segment.text.len().saturating_sub(20)..]
        );
    }
}

#[test]
fn unbroken_text_is_cut_hard_at_max_size() {
    let text = "a".repeat(1000);
    let segments = split_text(&text, &config(300, 50));

    for segment in &segments {
        assert!(segment.text.chars().count() <= 300);
    }
    assert_eq!(segments[0].end, 300);
    assert_eq!(segments[1].start, 250);
    assert_eq!(segments.last().unwrap().end, 1000);
}

#[test]
fn multibyte_text_splits_on_character_counts() {
    let text = "дискуссия о планах команды. ".repeat(40);
    let total = text.chars().count();
    let segments = split_text(&text, &config(300, 50));

    assert!(segments.len() > 1);
    assert_eq!(segments.last().unwrap().end, total);
    for segment in &segments {
        assert!(segment.text.chars().count() <= 300);
    }
}

#[test]
fn segment_offsets_slice_back_into_the_source() {
    let text = long_transcript();
    let offsets: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
    let segments = split_text(&text, &config(6000, 500));

    for segment in &segments {
        let byte_end = if segment.end >= offsets.len() {
            text.len()
        } else {
            offsets[segment.end]
        };
        let window = &text[offsets[segment.start]..byte_end];
        assert_eq!(window.trim(), segment.text);
    }
}
