//! Chat text helpers: colour codes and placeholders.

/// Section sign the host uses to introduce a formatting code.
pub const COLOUR_CHAR: char = '\u{a7}';

const FORMAT_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Translates `&`-prefixed formatting codes into host colour codes.
/// An `&` not followed by a valid code is left untouched.
#[must_use]
pub fn colour(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '&' && FORMAT_CODES.contains(next) => {
                out.push(COLOUR_CHAR);
                out.push(next.to_ascii_lowercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Removes host colour codes, leaving plain text.
#[must_use]
pub fn strip_colour(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == COLOUR_CHAR && FORMAT_CODES.contains(next) => {
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Substitutes the `{player}` placeholder.
#[must_use]
pub fn with_player(template: &str, player: &str) -> String {
    template.replace("{player}", player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_translates_valid_codes_only() {
        assert_eq!(colour("&aHi &zthere &&L"), "\u{a7}aHi &zthere &\u{a7}l");
    }

    #[test]
    fn test_strip_colour_removes_codes() {
        assert_eq!(strip_colour("\u{a7}e\u{a7}lNotch\u{a7}r "), "Notch ");
    }

    #[test]
    fn test_with_player_replaces_every_placeholder() {
        assert_eq!(with_player("{player}, {player}!", "Alex"), "Alex, Alex!");
    }
}
