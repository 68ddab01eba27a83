/// Emphasis and strong emphasis delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: char = '*';
    pub const UNDERSCORE: char = '_';

    pub fn is_delimiter(c: char) -> bool {
        c == Self::STAR || c == Self::UNDERSCORE
    }

    /// Delimiter string for a single or doubled run of `c`.
    pub fn syntax(c: char, double: bool) -> &'static str {
        match (c, double) {
            (Self::UNDERSCORE, false) => "_",
            (Self::UNDERSCORE, true) => "__",
            (_, false) => "*",
            (_, true) => "**",
        }
    }

    /// `_` is intraword-inert: it neither opens after nor closes before an
    /// alphanumeric character.
    pub fn flanked_by_word(c: char, neighbor: Option<char>) -> bool {
        c == Self::UNDERSCORE && neighbor.is_some_and(char::is_alphanumeric)
    }
}
