//! Parsing of AI completion text into display lines.
//!
//! The AI is instructed to avoid markdown bullets, but compliance is not
//! guaranteed. This is the defensive second layer: lines the parser cannot
//! classify as prose are dropped silently. Both functions are pure and
//! total; an empty result is a valid result.

use crate::prompt::BULLET_GLYPHS;

/// Convert raw completion text into display lines.
///
/// Splits on line breaks, trims whitespace, discards empty lines, and
/// discards any line whose first character is in [`BULLET_GLYPHS`].
pub fn roadmap_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            line.chars()
                .next()
                .map(|first| !BULLET_GLYPHS.contains(&first))
                .unwrap_or(false)
        })
        .map(str::to_string)
        .collect()
}

/// Split a chat reply into trimmed non-empty fragments for bullet-style
/// display. Fragments break on newlines and periods.
pub fn chat_fragments(reply: &str) -> Vec<String> {
    reply
        .split(['\n', '.'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadmap_lines_filters_glyphs_and_blanks() {
        let input = "* skip\n# skip\nkeep me\n\n  \n• skip\nkeep too";
        assert_eq!(roadmap_lines(input), vec!["keep me", "keep too"]);
    }

    #[test]
    fn test_roadmap_lines_preserves_order() {
        let input = "Phase 1: Planning\nStart Date: 01 March 2026\nOutcome:\nApproved requirements.";
        assert_eq!(
            roadmap_lines(input),
            vec![
                "Phase 1: Planning",
                "Start Date: 01 March 2026",
                "Outcome:",
                "Approved requirements.",
            ]
        );
    }

    #[test]
    fn test_roadmap_lines_drops_every_bullet_glyph() {
        for glyph in BULLET_GLYPHS {
            let input = format!("{} bulleted line\nplain line", glyph);
            assert_eq!(roadmap_lines(&input), vec!["plain line"]);
        }
    }

    #[test]
    fn test_roadmap_lines_trims_before_classifying() {
        // Indented bullets are still bullets once trimmed.
        assert_eq!(roadmap_lines("   * indented bullet\n  kept"), vec!["kept"]);
    }

    #[test]
    fn test_roadmap_lines_empty_input_is_valid() {
        assert!(roadmap_lines("").is_empty());
        assert!(roadmap_lines("\n\n  \n").is_empty());
        assert!(roadmap_lines("* a\n# b").is_empty());
    }

    #[test]
    fn test_roadmap_lines_is_idempotent() {
        let input = "* skip\nkeep me\n\n• skip\nkeep too";
        let once = roadmap_lines(input);
        let twice = roadmap_lines(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_chat_fragments_split_on_period_and_newline() {
        assert_eq!(
            chat_fragments("Hi there. How can I help?"),
            vec!["Hi there", "How can I help?"]
        );
        assert_eq!(
            chat_fragments("First line\nSecond line. Third"),
            vec!["First line", "Second line", "Third"]
        );
    }

    #[test]
    fn test_chat_fragments_drop_empty_pieces() {
        assert_eq!(chat_fragments("One..Two.\n\n"), vec!["One", "Two"]);
        assert!(chat_fragments("").is_empty());
        assert!(chat_fragments(" . . ").is_empty());
    }
}
