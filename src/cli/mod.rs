use std::{
    fs::File,
    io::{self, BufRead, Read, Write},
    path::PathBuf,
};

use crate::{core::ConvertError, sql::Converter};

/// Default name of the converted artifact.
pub const DEFAULT_OUTPUT: &str = "converted.dbml";

pub struct CliApp<I: BufRead, O: Write> {
    converter: Converter,

    input: I,
    output: O,
}

impl<I: BufRead, O: Write> CliApp<I, O> {
    pub fn new(converter: Converter, input: I, output: O) -> Self {
        Self {
            converter,
            input,
            output,
        }
    }

    /// Read the whole input, convert it, then write the result in one go.
    /// Nothing is written when reading or conversion fails.
    pub fn run(&mut self) -> Result<(), ConvertError> {
        let mut source = String::new();
        self.input.read_to_string(&mut source)?;

        let converted = self.converter.convert(&source)?;
        self.print(&converted)
    }

    fn print(&mut self, string: &str) -> Result<(), ConvertError> {
        self.output.write_all(string.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

/// File sink that is created on first write or flush, so a failed run
/// leaves no artifact behind.
pub struct OutputFile {
    path: PathBuf,
    file: Option<File>,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    fn open(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            self.file = Some(File::create(&self.path)?);
        }

        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "output file not open"))
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.open()?.write(buf)
    }

    // creates the file too, an empty conversion still leaves one
    fn flush(&mut self) -> io::Result<()> {
        self.open()?.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_run_writes_converted_text() {
        let input = "CREATE TABLE t (\n  id INT64 NOT NULL,\n) PRIMARY KEY (id);\n";
        let mut output = vec![];
        CliApp::new(Converter::new(), input.as_bytes(), &mut output)
            .run()
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "table t {\n  id INT64 [not null, pk]\n}\n"
        );
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let mut output = vec![];
        let err = CliApp::new(Converter::new(), "CREATE TABLE t (\n  x\n".as_bytes(), &mut output)
            .run()
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::ParseError);
        assert!(output.is_empty());
    }

    #[test]
    fn test_empty_conversion_still_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);

        CliApp::new(Converter::new(), "-- no tables\n".as_bytes(), OutputFile::new(&path))
            .run()
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_output_file_is_created_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);

        let mut file = OutputFile::new(&path);
        assert!(!path.exists());

        file.write_all(b"table t {\n}\n").unwrap();
        file.flush().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "table t {\n}\n");
    }
}
