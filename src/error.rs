//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Bad or missing invocation parameters. Fatal.
    Configuration(String),
    /// Output directory could not be cleared or created. Fatal.
    ResourceSetup(PathBuf, std::io::Error),
    /// One input file could not be opened or read. Recovered at file level.
    FileAccess(PathBuf, std::io::Error),
    /// Malformed record (missing doc id, truncated record). Recovered at record level.
    RecordParse(String),
    /// Malformed ground truth line. Recovered at line level.
    QrelsParse(String),
    Csv(csv::Error),
    Serde(serde_json::Error),
    Custom(String),
}

impl Error {
    /// Only configuration and setup failures abort a run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Configuration(_) | Error::ResourceSetup(..))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Configuration(msg) => write!(f, "configuration error: {}", msg),
            Error::ResourceSetup(path, e) => {
                write!(f, "could not set up {:?}: {}", path, e)
            }
            Error::FileAccess(path, e) => write!(f, "could not read {:?}: {}", path, e),
            Error::RecordParse(msg) => write!(f, "malformed record: {}", msg),
            Error::QrelsParse(msg) => write!(f, "malformed qrels line: {}", msg),
            Error::Csv(e) => write!(f, "report error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_kinds() {
        assert!(Error::Configuration("no src".to_string()).is_fatal());
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(Error::ResourceSetup(PathBuf::from("out"), io).is_fatal());
        assert!(!Error::RecordParse("no doc id".to_string()).is_fatal());
        assert!(!Error::QrelsParse("q1 x".to_string()).is_fatal());
    }
}
