use memchr::{memchr_iter, Memchr};

use crate::Encoding;

/// One undecoded line. `bytes` excludes the newline code unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub number: usize,
    pub bytes: &'a [u8],
}

/// Splits post-BOM input into raw lines on newline code units.
///
/// Narrow input splits on every `0x0A` byte. UTF-16 input only splits on a
/// `0x0A` byte that forms a whole, aligned code unit with a zero byte, so
/// lines never begin or end with half of a newline.
pub struct RawLines<'a> {
    bytes: &'a [u8],
    newlines: Memchr<'a>,
    encoding: Encoding,
    start: usize,
    number: usize,
    done: bool,
}

pub fn scan_lines(bytes: &[u8], encoding: Encoding) -> RawLines<'_> {
    RawLines {
        bytes,
        newlines: memchr_iter(b'\n', bytes),
        encoding,
        start: 0,
        number: 0,
        done: false,
    }
}

impl<'a> RawLines<'a> {
    /// Maps a `0x0A` byte offset to the line end and the next line start,
    /// or `None` when the byte is not a newline unit.
    fn newline_at(&self, idx: usize) -> Option<(usize, usize)> {
        match self.encoding {
            Encoding::Unspecified | Encoding::Utf8 => Some((idx, idx + 1)),
            Encoding::Utf16Le => {
                if idx % 2 == 0 && self.bytes.get(idx + 1) == Some(&0) {
                    Some((idx, idx + 2))
                } else {
                    None
                }
            }
            Encoding::Utf16Be => {
                if idx % 2 == 1 && self.bytes[idx - 1] == 0 {
                    Some((idx - 1, idx + 1))
                } else {
                    None
                }
            }
        }
    }

    fn emit(&mut self, end: usize, next_start: usize) -> RawLine<'a> {
        self.number += 1;
        let line = RawLine {
            number: self.number,
            bytes: &self.bytes[self.start..end],
        };
        self.start = next_start;
        line
    }
}

impl<'a> Iterator for RawLines<'a> {
    type Item = RawLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some(idx) = self.newlines.next() {
            if let Some((end, next_start)) = self.newline_at(idx) {
                return Some(self.emit(end, next_start));
            }
        }
        self.done = true;
        if self.start < self.bytes.len() {
            let len = self.bytes.len();
            return Some(self.emit(len, len));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(bytes: &[u8], encoding: Encoding) -> Vec<(usize, Vec<u8>)> {
        scan_lines(bytes, encoding)
            .map(|line| (line.number, line.bytes.to_vec()))
            .collect()
    }

    #[rstest::rstest]
    fn test_narrow_lines() {
        let lines = collect(b"[A]\r\n\nk=1", Encoding::Unspecified);
        assert_eq!(
            lines,
            vec![
                (1, b"[A]\r".to_vec()),
                (2, Vec::new()),
                (3, b"k=1".to_vec()),
            ]
        );
    }

    #[rstest::rstest]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(collect(b"a\n", Encoding::Utf8).len(), 1);
        assert!(collect(b"", Encoding::Utf8).is_empty());
    }

    #[rstest::rstest]
    fn test_utf16le_splits_on_aligned_units() {
        // "a\n" then U+0A61 ("\x61\x0A") which must not split, then "b".
        let bytes = [0x61, 0x00, 0x0A, 0x00, 0x61, 0x0A, 0x62, 0x00];
        let lines = collect(&bytes, Encoding::Utf16Le);
        assert_eq!(
            lines,
            vec![(1, vec![0x61, 0x00]), (2, vec![0x61, 0x0A, 0x62, 0x00])]
        );
    }

    #[rstest::rstest]
    fn test_utf16be_splits_on_aligned_units() {
        let bytes = [0x00, 0x61, 0x00, 0x0A, 0x0A, 0x00, 0x00, 0x62];
        let lines = collect(&bytes, Encoding::Utf16Be);
        assert_eq!(
            lines,
            vec![(1, vec![0x00, 0x61]), (2, vec![0x0A, 0x00, 0x00, 0x62])]
        );
    }

    #[rstest::rstest]
    fn test_utf16_odd_tail_is_kept_for_the_normalizer() {
        let bytes = [0x61, 0x00, 0x0A, 0x00, 0x62];
        let lines = collect(&bytes, Encoding::Utf16Le);
        assert_eq!(lines, vec![(1, vec![0x61, 0x00]), (2, vec![0x62])]);
    }
}
