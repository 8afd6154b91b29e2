use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while generating offset crops.
///
/// `Decode`, `DimensionMismatch` and `Encode` only ever affect a single file (or a
/// single crop of it) and are logged and counted by the generator. `CreateDir` and
/// `InputNotADirectory` abort the run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{}: image must be 512x512 pixels, got {width}x{height}", .path.display())]
    DimensionMismatch { path: PathBuf, width: u32, height: u32 },

    #[error("cannot write crop {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input folder {} is not a directory", .path.display())]
    InputNotADirectory { path: PathBuf },
}

impl Error {
    /// true if the run cannot continue after this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::CreateDir { .. } | Error::InputNotADirectory { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
