use std::io::{self, BufRead};

/// 逐行讀取 UTF-8 文字，行尾可為 `\n`、`\r\n` 或單獨的 `\r`，返回的行不含行尾
///
/// 最後一行的行尾不會多產生一個空行；非 UTF-8 內容返回 `InvalidData`。
pub struct TextLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R) -> Self {
        TextLines { reader, buf: Vec::new() }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        let mut consumed_any = false;
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                break;
            }
            consumed_any = true;
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    let terminator = available[pos];
                    self.buf.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    if terminator == b'\r' {
                        let next = self.reader.fill_buf()?;
                        if next.first() == Some(&b'\n') {
                            self.reader.consume(1);
                        }
                    }
                    return self.take_line().map(Some);
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
        if consumed_any {
            self.take_line().map(Some)
        } else {
            Ok(None)
        }
    }

    fn take_line(&mut self) -> io::Result<String> {
        String::from_utf8(std::mem::take(&mut self.buf))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn collect(bytes: &[u8]) -> Vec<String> {
        TextLines::new(Cursor::new(bytes.to_vec())).map(|l| l.unwrap()).collect()
    }

    #[test]
    fn all_three_terminators_end_a_line() {
        assert_eq!(collect(b"A\nB\r\nC\rD"), ["A", "B", "C", "D"]);
        assert_eq!(collect(b"A\rB\r"), ["A", "B"]);
    }

    #[test]
    fn empty_lines_are_kept_and_final_terminator_adds_none() {
        assert_eq!(collect(b"\n\nx\n"), ["", "", "x"]);
        assert_eq!(collect(b"\r\r"), ["", ""]);
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn crlf_split_across_buffer_refill() {
        let reader = BufReader::with_capacity(2, Cursor::new(b"A\r\nB".to_vec()));
        let lines: Vec<String> = TextLines::new(reader).map(|l| l.unwrap()).collect();
        assert_eq!(lines, ["A", "B"]);
    }

    #[test]
    fn invalid_utf8_is_reported_per_line() {
        let mut lines = TextLines::new(Cursor::new(b"ok\n\xFF\n".to_vec()));
        assert_eq!(lines.next().unwrap().unwrap(), "ok");
        assert_eq!(lines.next().unwrap().unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
