use std::{error::Error, fmt::Display};

#[derive(Clone, Debug)]
pub struct ConvertError {
    pub kind: ErrorKind,
    pub message: String,
}

#[allow(clippy::enum_variant_names)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InputError,
    ParseError,
    IoError,
}

impl Error for ConvertError {}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InputError => write!(f, "Input Error"),
            ErrorKind::ParseError => write!(f, "Parse Error"),
            ErrorKind::IoError => write!(f, "IO Error"),
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(e: std::io::Error) -> Self {
        ConvertError::new(ErrorKind::IoError, e.to_string())
    }
}

impl ConvertError {
    pub fn new(kind: ErrorKind, message: impl AsRef<str>) -> Self {
        Self {
            kind,
            message: message.as_ref().to_string(),
        }
    }

    /// Malformed source line, `line_no` is 1-based.
    pub fn malformed(line_no: usize, message: impl AsRef<str>) -> Self {
        Self::new(
            ErrorKind::ParseError,
            format!("line {}: {}", line_no, message.as_ref()),
        )
    }
}
