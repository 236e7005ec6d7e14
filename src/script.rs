//! Unicode script classification for candidate vocabulary pieces.

use std::sync::OnceLock;

/// Reserved codepoint marking "this token begins a new word" in the
/// normalized corpus representation.
pub const WORD_BOUNDARY_MARKER: char = '\u{2581}';

/// Script category assigned to a single Unicode codepoint.
///
/// The mapping is total: every `char` falls into exactly one category.
/// Scripts without a dedicated variant (Cyrillic, Greek, Arabic, ...)
/// classify as [`ScriptCategory::Other`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScriptCategory {
    /// Latin letters, including the extended and fullwidth ranges.
    Latin,
    /// Han ideographs and ideographic marks.
    Han,
    /// Hiragana letters and iteration marks.
    Hiragana,
    /// Katakana letters, plus the script-neutral kana marks that
    /// linguistically belong to a kana word (prolonged-sound and
    /// voiced-sound marks).
    Katakana,
    /// Hangul syllables and jamo.
    Hangul,
    /// Thai letters and marks.
    Thai,
    /// Script-neutral characters: digits, punctuation, currency and other
    /// generic signs.
    Common,
    /// The word-boundary marker [`WORD_BOUNDARY_MARKER`].
    Marker,
    /// Hard segmentation boundaries: control characters, raw whitespace,
    /// and the replacement character. A piece containing one is never a
    /// valid vocabulary unit.
    Boundary,
    /// Everything else.
    Other,
}

type Sc = ScriptCategory;

/// Codepoint ranges carrying an explicit category, at Unicode block
/// granularity. Kept grouped by script here; sorted once at first lookup.
const RAW_RANGES: &[(u32, u32, Sc)] = &[
    // Latin
    (0x0041, 0x005A, Sc::Latin),
    (0x0061, 0x007A, Sc::Latin),
    (0x00AA, 0x00AA, Sc::Latin),
    (0x00BA, 0x00BA, Sc::Latin),
    (0x00C0, 0x00D6, Sc::Latin),
    (0x00D8, 0x00F6, Sc::Latin),
    (0x00F8, 0x02AF, Sc::Latin),
    (0x02B0, 0x02B8, Sc::Latin),
    (0x02E0, 0x02E4, Sc::Latin),
    (0x1E00, 0x1EFF, Sc::Latin),
    (0x2160, 0x2188, Sc::Latin),
    (0x2C60, 0x2C7F, Sc::Latin),
    (0xA720, 0xA7FF, Sc::Latin),
    (0xAB30, 0xAB6F, Sc::Latin),
    (0xFB00, 0xFB06, Sc::Latin),
    (0xFF21, 0xFF3A, Sc::Latin),
    (0xFF41, 0xFF5A, Sc::Latin),
    // Han
    (0x2E80, 0x2EF3, Sc::Han),
    (0x2F00, 0x2FD5, Sc::Han),
    (0x3005, 0x3005, Sc::Han),
    (0x3007, 0x3007, Sc::Han),
    (0x3021, 0x3029, Sc::Han),
    (0x3038, 0x303B, Sc::Han),
    (0x31C0, 0x31E3, Sc::Han),
    (0x3400, 0x4DBF, Sc::Han),
    (0x4E00, 0x9FFF, Sc::Han),
    (0xF900, 0xFAD9, Sc::Han),
    (0x20000, 0x2A6DF, Sc::Han),
    (0x2A700, 0x2EBEF, Sc::Han),
    (0x2F800, 0x2FA1D, Sc::Han),
    (0x30000, 0x3134A, Sc::Han),
    // Hiragana
    (0x3041, 0x3096, Sc::Hiragana),
    (0x309D, 0x309F, Sc::Hiragana),
    // Katakana
    (0x30A1, 0x30FA, Sc::Katakana),
    (0x30FD, 0x30FF, Sc::Katakana),
    (0x31F0, 0x31FF, Sc::Katakana),
    (0x32D0, 0x32FE, Sc::Katakana),
    (0x3300, 0x3357, Sc::Katakana),
    (0xFF66, 0xFF6F, Sc::Katakana),
    (0xFF71, 0xFF9D, Sc::Katakana),
    // Hangul
    (0x1100, 0x11FF, Sc::Hangul),
    (0x302E, 0x302F, Sc::Hangul),
    (0x3131, 0x318E, Sc::Hangul),
    (0xA960, 0xA97C, Sc::Hangul),
    (0xAC00, 0xD7A3, Sc::Hangul),
    (0xD7B0, 0xD7C6, Sc::Hangul),
    (0xD7CB, 0xD7FB, Sc::Hangul),
    (0xFFA0, 0xFFDC, Sc::Hangul),
    // Thai (the baht sign U+0E3F is a currency sign, hence Common)
    (0x0E01, 0x0E3A, Sc::Thai),
    (0x0E40, 0x0E5B, Sc::Thai),
    // Common
    (0x0021, 0x0040, Sc::Common),
    (0x005B, 0x0060, Sc::Common),
    (0x007B, 0x007E, Sc::Common),
    (0x00A1, 0x00A9, Sc::Common),
    (0x00AB, 0x00B9, Sc::Common),
    (0x00BB, 0x00BF, Sc::Common),
    (0x00D7, 0x00D7, Sc::Common),
    (0x00F7, 0x00F7, Sc::Common),
    (0x0E3F, 0x0E3F, Sc::Common),
    (0x2000, 0x206F, Sc::Common),
    (0x2070, 0x209C, Sc::Common),
    (0x20A0, 0x20CF, Sc::Common),
    (0x2100, 0x214F, Sc::Common),
    (0x2150, 0x215F, Sc::Common),
    (0x2189, 0x218B, Sc::Common),
    (0x2190, 0x2BFF, Sc::Common),
    (0x2E00, 0x2E7F, Sc::Common),
    (0x3001, 0x3004, Sc::Common),
    (0x3006, 0x3006, Sc::Common),
    (0x3008, 0x3020, Sc::Common),
    (0x302A, 0x302D, Sc::Common),
    (0x3030, 0x3037, Sc::Common),
    (0x303C, 0x303F, Sc::Common),
    (0xFE10, 0xFE19, Sc::Common),
    (0xFE30, 0xFE4F, Sc::Common),
    (0xFE50, 0xFE6B, Sc::Common),
    (0xFF01, 0xFF20, Sc::Common),
    (0xFF3B, 0xFF40, Sc::Common),
    (0xFF5B, 0xFF65, Sc::Common),
    (0xFFE0, 0xFFE6, Sc::Common),
    (0xFFE8, 0xFFEE, Sc::Common),
];

fn script_ranges() -> &'static [(u32, u32, Sc)] {
    static RANGES: OnceLock<Vec<(u32, u32, Sc)>> = OnceLock::new();
    RANGES.get_or_init(|| {
        let mut ranges = RAW_RANGES.to_vec();
        ranges.sort_unstable_by_key(|&(start, _, _)| start);
        ranges
    })
}

/// Returns `true` for codepoints the surrounding pipeline treats as hard
/// segmentation boundaries: control characters, whitespace that survived
/// normalization, and the replacement character the normalizer emits for
/// unencodable input.
fn is_segment_boundary(c: char) -> bool {
    if c.is_control() {
        return true;
    }
    matches!(
        c,
        '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
            | '\u{FFFD}'
    )
}

/// Returns `true` for the kana marks Unicode tags script-neutral but that
/// belong to the word they follow: the prolonged-sound marks and the
/// voiced/semi-voiced sound marks, fullwidth and halfwidth.
fn is_kana_mark(c: char) -> bool {
    matches!(
        c,
        '\u{3099}'..='\u{309C}' | '\u{30FC}' | '\u{FF70}' | '\u{FF9E}' | '\u{FF9F}'
    )
}

/// Classifies a single codepoint into its [`ScriptCategory`].
///
/// Total, deterministic, and side-effect free; the range table is built
/// once and shared read-only across all callers.
#[must_use]
pub fn classify(c: char) -> ScriptCategory {
    if c == WORD_BOUNDARY_MARKER {
        return ScriptCategory::Marker;
    }
    if is_segment_boundary(c) {
        return ScriptCategory::Boundary;
    }
    if is_kana_mark(c) {
        return ScriptCategory::Katakana;
    }
    let ranges = script_ranges();
    let cp = u32::from(c);
    let idx = ranges.partition_point(|&(start, _, _)| start <= cp);
    if idx > 0 {
        let (_, end, category) = ranges[idx - 1];
        if cp <= end {
            return category;
        }
    }
    ScriptCategory::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_script_letters() {
        assert_eq!(classify('a'), ScriptCategory::Latin);
        assert_eq!(classify('Z'), ScriptCategory::Latin);
        assert_eq!(classify('é'), ScriptCategory::Latin);
        assert_eq!(classify('漢'), ScriptCategory::Han);
        assert_eq!(classify('字'), ScriptCategory::Han);
        assert_eq!(classify('あ'), ScriptCategory::Hiragana);
        assert_eq!(classify('べ'), ScriptCategory::Hiragana);
        assert_eq!(classify('グ'), ScriptCategory::Katakana);
        assert_eq!(classify('ル'), ScriptCategory::Katakana);
        assert_eq!(classify('한'), ScriptCategory::Hangul);
        assert_eq!(classify('ก'), ScriptCategory::Thai);
    }

    #[test]
    fn classifies_neutral_characters_as_common() {
        for c in ['0', '9', '$', '.', ',', '!', '€', '×', '÷', '→', '。'] {
            assert_eq!(classify(c), ScriptCategory::Common, "codepoint {c:?}");
        }
    }

    #[test]
    fn kana_marks_are_katakana() {
        assert_eq!(classify('ー'), ScriptCategory::Katakana);
        assert_eq!(classify('\u{FF70}'), ScriptCategory::Katakana);
        assert_eq!(classify('\u{3099}'), ScriptCategory::Katakana);
        assert_eq!(classify('゛'), ScriptCategory::Katakana);
    }

    #[test]
    fn boundary_covers_controls_and_whitespace() {
        for c in ['\t', '\n', '\r', '\0', ' ', '\u{00A0}', '\u{3000}', '\u{FEFF}', '\u{FFFD}'] {
            assert_eq!(classify(c), ScriptCategory::Boundary, "codepoint {c:?}");
        }
    }

    #[test]
    fn marker_is_its_own_category() {
        assert_eq!(classify(WORD_BOUNDARY_MARKER), ScriptCategory::Marker);
        assert_ne!(classify('_'), ScriptCategory::Marker);
    }

    #[test]
    fn unlisted_scripts_fall_back_to_other() {
        assert_eq!(classify('Я'), ScriptCategory::Other);
        assert_eq!(classify('λ'), ScriptCategory::Other);
        assert_eq!(classify('م'), ScriptCategory::Other);
        assert_eq!(classify('ह'), ScriptCategory::Other);
    }

    #[test]
    fn table_is_sorted_and_non_overlapping() {
        let ranges = script_ranges();
        for pair in ranges.windows(2) {
            let (_, prev_end, _) = pair[0];
            let (next_start, _, _) = pair[1];
            assert!(prev_end < next_start, "overlap near {next_start:#X}");
        }
        for &(start, end, _) in ranges {
            assert!(start <= end, "inverted range at {start:#X}");
        }
    }

    #[test]
    fn classification_is_total() {
        let mut seen_other = 0usize;
        for cp in 0..=char::MAX as u32 {
            let Some(c) = char::from_u32(cp) else {
                continue;
            };
            if classify(c) == ScriptCategory::Other {
                seen_other += 1;
            }
        }
        assert!(seen_other > 0);
    }
}
