use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RUNS_OF_SPACES: Regex = Regex::new(" +").unwrap();
    static ref RUNS_OF_NEWLINES: Regex = Regex::new(r"(\r?\n *)+").unwrap();
}

/// Normalizes text pulled out of listing markup.
///
/// Bullet and registered-trademark glyphs are rewritten before whitespace
/// collapsing, so the result is stable under repeated application:
/// `"• item"` becomes `"* item"`, runs of spaces collapse to one space,
/// runs of newlines collapse to one newline, and the result is trimmed
/// and passed through [`ascii_lossy`].
pub fn prettify_text(raw: &str) -> String {
    let glyphs = raw.replace('\u{2022}', "* ").replace('\u{00ae}', " (R) ");
    let spaced = RUNS_OF_SPACES.replace_all(&glyphs, " ");
    let lined = RUNS_OF_NEWLINES.replace_all(&spaced, "\n");
    ascii_lossy(lined.trim())
}

/// Drops every non-ASCII character. Exotic glyphs the source pages mix in
/// are discarded rather than transliterated; the data loss is accepted.
pub fn ascii_lossy(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_spaces_and_newlines() {
        assert_eq!(prettify_text("a   b\n\n\nc"), "a b\nc");
    }

    #[test]
    fn rewrites_bullet_glyph() {
        assert_eq!(prettify_text("\u{2022} item"), "* item");
    }

    #[test]
    fn rewrites_registered_glyph() {
        assert_eq!(prettify_text("Brand\u{ae} Gym"), "Brand (R) Gym");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(prettify_text("  hello \n"), "hello");
    }

    #[test]
    fn handles_newlines_with_trailing_spaces() {
        assert_eq!(prettify_text("one\n   \n  two"), "one\ntwo");
    }

    #[test]
    fn drops_non_ascii_characters() {
        assert_eq!(ascii_lossy("caf\u{e9}\u{2122}"), "caf");
        assert_eq!(prettify_text("caf\u{e9} bar\u{2122}"), "caf bar");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "\u{2022} Washer/Dryer\n\u{2022} Dishwasher\u{ae}",
            "a   b\n\n\nc",
            "  caf\u{e9}  \n\n done ",
            "already clean",
        ];
        for input in inputs {
            let once = prettify_text(input);
            assert_eq!(prettify_text(&once), once, "not stable for {input:?}");
        }
    }
}
