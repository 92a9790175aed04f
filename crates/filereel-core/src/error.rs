use std::fmt;

/// Result type for filereel-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or spinning a reel
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),
    /// A git subprocess exited unsuccessfully; carries its stderr
    Git(String),
    /// The tracked-file listing was empty after filtering
    NoMatchingFiles,
    /// Fewer files than screen rows, so no full window exists
    NotEnoughFiles { files: usize, rows: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Git(msg) => write!(f, "git error: {}", msg),
            Error::NoMatchingFiles => write!(f, "no matching files to spin"),
            Error::NotEnoughFiles { files, rows } => write!(
                f,
                "not enough files to fill the screen ({} tracked, {} rows)",
                files, rows
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
