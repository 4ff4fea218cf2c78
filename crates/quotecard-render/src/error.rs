use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the card renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
