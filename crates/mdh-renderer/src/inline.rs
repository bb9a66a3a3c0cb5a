//! Inline formatting substitutions.
//!
//! Rewrites a single line's text before block classification: bold,
//! emphasis, MD5 hashing of `[[...]]` spans, and `c`/`C` stripping of
//! `((...))` spans. Matches are non-greedy (shortest span between markers)
//! and leftmost-first; there is no escaping mechanism.

use std::sync::LazyLock;

use md5::{Digest, Md5};
use regex::{Captures, Regex};

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());
static MD5_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[(.+?)\]\]").unwrap());
static STRIP_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\((.+?)\)\)").unwrap());

/// Apply the inline substitutions to one line of text.
///
/// Substitutions run in a fixed order so that bold markers inside emphasis
/// spans are already resolved:
///
/// 1. `**X**` → `<b>X</b>`
/// 2. `__X__` → `<em>X</em>`
/// 3. `[[X]]` → lowercase hex MD5 digest of X's UTF-8 bytes
/// 4. `((X))` → X with every `c` and `C` removed
///
/// Markers are consumed, not re-introduced: applying this function to its
/// own output is a no-op.
#[must_use]
pub fn format_inline(line: &str) -> String {
    let bold = BOLD.replace_all(line, "<b>$1</b>");
    let emphasized = EMPHASIS.replace_all(&bold, "<em>$1</em>");
    let hashed = MD5_SPAN.replace_all(&emphasized, |caps: &Captures<'_>| md5_hex(&caps[1]));
    let stripped = STRIP_SPAN.replace_all(&hashed, |caps: &Captures<'_>| {
        caps[1]
            .chars()
            .filter(|&c| c != 'c' && c != 'C')
            .collect::<String>()
    });
    stripped.into_owned()
}

/// Lowercase hex MD5 digest of the text's UTF-8 bytes.
fn md5_hex(text: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bold() {
        assert_eq!(format_inline("**Hello**"), "<b>Hello</b>");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(format_inline("__Hello__"), "<em>Hello</em>");
    }

    #[test]
    fn test_bold_inside_emphasis() {
        // Bold runs first, so its markers are resolved before emphasis
        assert_eq!(
            format_inline("__before **inner** after__"),
            "<em>before <b>inner</b> after</em>"
        );
    }

    #[test]
    fn test_non_greedy_shortest_span() {
        assert_eq!(
            format_inline("**a** middle **b**"),
            "<b>a</b> middle <b>b</b>"
        );
    }

    #[test]
    fn test_md5_span() {
        // MD5("abc")
        assert_eq!(
            format_inline("[[abc]]"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn test_md5_span_is_lowercase_hex() {
        let digest = format_inline("[[best_school]]");
        assert_eq!(digest.len(), 32);
        assert!(
            digest
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_multiple_md5_spans() {
        let result = format_inline("[[a]] and [[b]]");
        assert_eq!(result, "0cc175b9c0f1b6a831c399e269772661 and 92eb5ffee6ae2fec3ad71c777531578f");
    }

    #[test]
    fn test_strip_span_removes_c_and_upper_c() {
        assert_eq!(format_inline("((Cool Code))"), "ool ode");
    }

    #[test]
    fn test_strip_span_preserves_other_case() {
        assert_eq!(format_inline("((Chicago))"), "hiago");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(format_inline("no markers here"), "no markers here");
    }

    #[test]
    fn test_unterminated_markers_unchanged() {
        assert_eq!(format_inline("**open"), "**open");
        assert_eq!(format_inline("[[open"), "[[open");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let once = format_inline("**bold** __em__ [[abc]] ((Cool))");
        assert_eq!(format_inline(&once), once);
    }
}
