/// Byte cursor over a single script line.
///
/// The line ends at the first NUL byte, if there is one. Reading past the end
/// yields `0`, so callers can probe freely without bounds checks.
pub struct Cursor<'a> {
    text: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        let end = line.iter().position(|&b| b == 0).unwrap_or(line.len());
        Cursor {
            text: &line[..end],
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    pub fn peek_at(&self, offset: usize) -> u8 {
        self.text.get(self.pos + offset).copied().unwrap_or(0)
    }

    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    pub fn advance_by(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.text.len());
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.text[self.pos..].starts_with(prefix)
    }

    pub fn skip_whitespace(&mut self) {
        while is_space(self.peek()) {
            self.advance();
        }
    }

    pub fn rest(&self) -> &'a [u8] {
        &self.text[self.pos..]
    }
}

/// C-locale `isspace`: space, `\t`, `\n`, `\v`, `\f` and `\r`.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}
