use std::fmt;

#[derive(Debug)]
pub enum Error {
    ConfigParse(String),
    BundleParse(String),
    UnknownLocale(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigParse(msg) => write!(f, "Configuration parse error: {}", msg),
            Error::BundleParse(msg) => write!(f, "Translation bundle error: {}", msg),
            Error::UnknownLocale(code) => write!(
                f,
                "Unknown locale code '{}': display-name table out of sync with locale list",
                code
            ),
            Error::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::BundleParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
