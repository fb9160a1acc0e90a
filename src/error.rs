use std::{fmt::Display, io};

#[derive(Debug)]
pub enum Error {
    IoError(io::Error),
    InvalidBody,
    InvalidJson(serde_json::Error),
    InvalidJsonRpc(serde_json::Error),
    MissingResponse,
    TemplateError(tera::Error),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IoError(e) => write!(f, "IoError: {}", e),
            Error::InvalidBody => write!(f, "The body couldn't be captured"),
            Error::InvalidJson(e) => write!(f, "The body is not valid JSON: {}", e),
            Error::InvalidJsonRpc(e) => write!(f, "Invalid JSON-RPC envelope: {}", e),
            Error::MissingResponse => {
                write!(f, "A request has no response attached")
            }
            Error::TemplateError(e) => write!(f, "Template error: {}", e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IoError(e)
    }
}

impl From<tera::Error> for Error {
    fn from(e: tera::Error) -> Self {
        Error::TemplateError(e)
    }
}
