use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    /// Kinematic evaluation failed.
    Kinematic(trilink_core::Error),
    /// An I/O error occurred.
    Io(io::Error),
    /// The trace writer failed.
    Trace(csv::Error),
    /// The configuration could not be parsed.
    Config(toml::de::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Kinematic(e) => write!(f, "kinematic error: {}", e),
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Trace(e) => write!(f, "trace error: {}", e),
            Error::Config(e) => write!(f, "configuration error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Kinematic(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Trace(e) => Some(e),
            Error::Config(e) => Some(e),
        }
    }
}

impl From<trilink_core::Error> for Error {
    fn from(value: trilink_core::Error) -> Self {
        Error::Kinematic(value)
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::Trace(value)
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Error::Config(value)
    }
}
