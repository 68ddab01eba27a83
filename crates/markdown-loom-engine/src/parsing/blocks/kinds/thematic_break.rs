/// Horizontal rule: three or more `-`, `*` or `_`, optionally spaced.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [u8; 3] = [b'-', b'*', b'_'];
    pub const MIN_RUN: usize = 3;

    pub fn matches(line: &str) -> bool {
        if line.bytes().take_while(|&b| b == b' ').count() > 3 {
            return false;
        }
        let mut marks = line.bytes().filter(|b| !matches!(b, b' ' | b'\t'));
        let Some(first) = marks.next() else {
            return false;
        };
        if !Self::CHARS.contains(&first) {
            return false;
        }
        let mut count = 1;
        for b in marks {
            if b != first {
                return false;
            }
            count += 1;
        }
        count >= Self::MIN_RUN
    }
}
