mod http;

use thiserror::Error;

use crate::app::Image;

pub use http::HttpAssetProvider;

/// A named file read out of a downloaded archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("failed to read response body from {url}: {source}")]
    ReadBody {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("archive from {url} is not a readable zip: {source}")]
    Archive {
        url: String,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("failed to read archive entry {name}: {source}")]
    ArchiveEntry {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{what} not found in archive")]
    MissingEntry { what: String },
    #[error("failed to decode image {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

/// Source of remote images and archives.
pub trait AssetProvider {
    fn fetch_image(&self, url: &str) -> Result<Image, AssetError>;
    fn fetch_archive(&self, url: &str) -> Result<Vec<ArchiveEntry>, AssetError>;
}

/// Decodes a PNG, naming the source in the error.
pub fn decode_image(name: &str, bytes: &[u8]) -> Result<Image, AssetError> {
    Image::from_png_bytes(bytes).map_err(|source| AssetError::Decode {
        name: name.to_string(),
        source,
    })
}
