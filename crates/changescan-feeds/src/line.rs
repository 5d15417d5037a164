//! The "read next line" seam the scanner pulls from.

use std::io::{self, BufRead};

/// Anything that can hand out one feed line at a time.
///
/// `next_line` clears `buf`, fills it with the next line without its
/// terminator and returns `Ok(true)`, or returns `Ok(false)` at end of stream.
pub trait LineSource {
    fn next_line(&mut self, buf: &mut String) -> io::Result<bool>;
}

impl<R: BufRead + ?Sized> LineSource for R {
    /// Splits on `\n`, `\r\n` and a lone `\r`.
    fn next_line(&mut self, buf: &mut String) -> io::Result<bool> {
        let mut bytes = std::mem::take(buf).into_bytes();
        bytes.clear();
        let mut read_any = false;
        // Set after a `\r`: a directly following `\n` belongs to the same terminator.
        let mut after_cr = false;

        loop {
            let available = match self.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if after_cr {
                if available.first() == Some(&b'\n') {
                    self.consume(1);
                }
                break;
            }
            if available.is_empty() {
                break;
            }
            read_any = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    let terminator = available[i];
                    bytes.extend_from_slice(&available[..i]);
                    self.consume(i + 1);
                    if terminator == b'\n' {
                        break;
                    }
                    after_cr = true;
                }
                None => {
                    let len = available.len();
                    bytes.extend_from_slice(available);
                    self.consume(len);
                }
            }
        }

        *buf = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(read_any)
    }
}
