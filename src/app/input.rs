use crate::core::{InputSource, Result};
use std::io::{BufRead, Cursor};

fn strip_line_ending(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

/// 行程的標準輸入。多個迴圈共用時，每次讀取一整行
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead + Send> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineInput<Cursor<Vec<u8>>> {
    /// Scripted input, one answer per line.
    pub fn from_script(script: &str) -> Self {
        Self::new(Cursor::new(script.as_bytes().to_vec()))
    }
}

impl<R: BufRead + Send> InputSource for LineInput<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_yields_lines_then_end() {
        let mut input = LineInput::from_script("1\r\n2\n\n3");
        assert_eq!(input.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("2"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("3"));
        assert_eq!(input.read_line().unwrap(), None);
    }
}
