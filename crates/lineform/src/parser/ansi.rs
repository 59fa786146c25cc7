/// ANSI escape stripping
///
/// Lines captured from terminals often carry color escape sequences that
/// defeat the structural patterns (a line cannot start with a timestamp if
/// it starts with `\x1b[32m`). Stripping is opt-in so already-clean input
/// stays byte-identical.
use std::borrow::Cow;

const ESC: char = '\u{1b}';

/// Remove ANSI escape sequences: CSI (`ESC [ ... final`), OSC
/// (`ESC ] ... BEL|ST`), and two-byte escapes.
///
/// Returns `Cow::Borrowed` when the input contains no ESC byte at all.
pub fn strip_ansi(input: &str) -> Cow<'_, str> {
    if !input.contains(ESC) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != ESC {
            out.push(c);
            continue;
        }
        match chars.next() {
            // CSI: skip parameter/intermediate bytes up to the final byte
            Some('[') => {
                for c in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&c) {
                        break;
                    }
                }
            }
            // OSC: terminated by BEL or ST (ESC \)
            Some(']') => {
                let mut prev_esc = false;
                for c in chars.by_ref() {
                    if c == '\u{7}' || (prev_esc && c == '\\') {
                        break;
                    }
                    prev_esc = c == ESC;
                }
            }
            // Two-byte escape: the second byte is dropped with it
            Some(_) | None => {}
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_borrows() {
        let input = "2024-01-01 12:00:00 [INFO] plain";
        assert!(matches!(strip_ansi(input), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strips_color_codes() {
        let input = "\x1b[32m[INFO]\x1b[0m ready";
        assert_eq!(strip_ansi(input), "[INFO] ready");
    }

    #[test]
    fn test_strips_osc_title_sequence() {
        let input = "\x1b]0;window title\x07[WARN] after osc";
        assert_eq!(strip_ansi(input), "[WARN] after osc");
    }

    #[test]
    fn test_strips_osc_with_st_terminator() {
        let input = "\x1b]8;;http://example.com\x1b\\link text";
        assert_eq!(strip_ansi(input), "link text");
    }

    #[test]
    fn test_strips_two_byte_escape() {
        let input = "before\x1bMafter";
        assert_eq!(strip_ansi(input), "beforeafter");
    }

    #[test]
    fn test_unterminated_sequence_at_eol() {
        assert_eq!(strip_ansi("tail\x1b["), "tail");
        assert_eq!(strip_ansi("tail\x1b"), "tail");
    }

    #[test]
    fn test_stripped_line_becomes_recognizable() {
        let input = "\x1b[1;31m2024-01-01 12:00:00 [ERROR] red alert\x1b[0m";
        assert_eq!(strip_ansi(input), "2024-01-01 12:00:00 [ERROR] red alert");
    }
}
