use std::ffi::OsString;
use std::io::{self, BufRead, Write};

/// Line-oriented console over any reader/writer pair.
///
/// The binary wires this to locked stdin/stdout; tests use a `Cursor` and a
/// `Vec<u8>` so whole sessions can be asserted on without a terminal.
///
/// Input is read as raw bytes. Nothing typed can fail to decode: path
/// operands keep their exact bytes, and free text is decoded lossily.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Read one line as bytes, without its terminator. `None` means end of
    /// input.
    pub fn read_bytes(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Read one line as text; invalid UTF-8 becomes U+FFFD.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self
            .read_bytes()?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Show `text` (no newline added) and read the answer as text.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.write_str(text)?;
        self.read_line()
    }

    /// Show `text` and read the answer as a path operand, byte for byte.
    pub fn prompt_path(&mut self, text: &str) -> io::Result<Option<OsString>> {
        self.write_str(text)?;
        Ok(self.read_bytes()?.map(bytes_to_os_string))
    }

    /// Write `text` verbatim and flush so prompts are visible before a read.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Write one line.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    /// Give back the writer, e.g. to inspect captured output in tests.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(unix)]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_strips_terminators() {
        let mut c = Console::new(Cursor::new("one\r\ntwo\nthree"), Vec::new());
        assert_eq!(c.read_line().unwrap().as_deref(), Some("one"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("two"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("three"));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn blank_line_is_not_end_of_input() {
        let mut c = Console::new(Cursor::new("\n"), Vec::new());
        assert_eq!(c.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn prompt_writes_text_before_reading() {
        let mut c = Console::new(Cursor::new("answer\n"), Vec::new());
        let got = c.prompt("Question: ").unwrap();
        assert_eq!(got.as_deref(), Some("answer"));
        c.say("done").unwrap();
        assert_eq!(String::from_utf8(c.into_output()).unwrap(), "Question: done\n");
    }

    #[test]
    fn invalid_utf8_is_read_not_rejected() {
        let mut c = Console::new(Cursor::new(b"\xff\xfe\r\ncaf\xe9\n".to_vec()), Vec::new());
        assert_eq!(c.read_line().unwrap().as_deref(), Some("\u{fffd}\u{fffd}"));
        assert_eq!(c.read_bytes().unwrap(), Some(b"caf\xe9".to_vec()));
        assert_eq!(c.read_bytes().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn prompt_path_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;
        let mut c = Console::new(Cursor::new(b" caf\xe9.txt \n".to_vec()), Vec::new());
        let got = c.prompt_path("File: ").unwrap().unwrap();
        assert_eq!(got.as_bytes(), b" caf\xe9.txt ");
    }
}
