// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Pushing the frame buffer to the window failed
    AssetLoad { path: PathBuf, reason: String }, // Reading/decoding an image failed
}

impl Error {
    /// True for failures that happen before the first frame is drawn.
    pub fn during_startup(&self) -> bool {
        matches!(self, Error::WindowInit(_) | Error::AssetLoad { .. })
    }

    pub(crate) fn asset(path: impl Into<PathBuf>, reason: impl Display) -> Self {
        Error::AssetLoad { path: path.into(), reason: reason.to_string() }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::AssetLoad { path, reason } => {
                write!(f, "Unable to load image {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}
