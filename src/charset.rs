//! Character classes shared by the generator and the evaluator sections.

/// Symbols accepted by the `special` requirement and used by the generator.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Full generator alphabet: uppercase, lowercase, digits, then the symbols.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                              abcdefghijklmnopqrstuvwxyz\
                              0123456789\
                              !@#$%^&*";

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}
