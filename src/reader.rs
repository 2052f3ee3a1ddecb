use std::io::{self, BufRead, ErrorKind};

use crate::config::MAX_LINE_LEN;

/// Splits a script into raw lines the way a fixed-size `fgets` buffer does.
///
/// Each item keeps its trailing `\n` and holds at most `max_len` bytes. A
/// physical line longer than that comes out as several items.
pub struct ScriptLines<R> {
    reader: R,
    max_len: usize,
}

impl<R: BufRead> ScriptLines<R> {
    pub fn new(reader: R) -> Self {
        Self::with_max_len(reader, MAX_LINE_LEN)
    }

    pub fn with_max_len(reader: R, max_len: usize) -> Self {
        ScriptLines {
            reader,
            max_len: max_len.max(1),
        }
    }

    fn read_chunk(&mut self, buf: &mut Vec<u8>) -> io::Result<()> {
        while buf.len() < self.max_len {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if available.is_empty() {
                break;
            }

            let room = self.max_len - buf.len();
            let window = &available[..available.len().min(room)];
            let (take, done) = match window.iter().position(|&b| b == b'\n') {
                Some(newline) => (newline + 1, true),
                None => (window.len(), false),
            };
            buf.extend_from_slice(&window[..take]);
            self.reader.consume(take);

            if done {
                break;
            }
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for ScriptLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.read_chunk(&mut buf) {
            Ok(()) if buf.is_empty() => None,
            Ok(()) => Some(Ok(buf)),
            Err(err) => Some(Err(err)),
        }
    }
}
