use std::io::{Cursor, Read};
use std::time::Duration;

use tracing::debug;
use zip::ZipArchive;

use crate::app::Image;

use super::{decode_image, ArchiveEntry, AssetError, AssetProvider};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Fetches assets over HTTP(S) with a global per-request timeout.
pub struct HttpAssetProvider {
    agent: ureq::Agent,
}

impl Default for HttpAssetProvider {
    fn default() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }
}

impl HttpAssetProvider {
    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self { agent }
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, AssetError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|source| AssetError::Request {
                url: url.to_string(),
                source: Box::new(source),
            })?;
        let mut body = response.into_body();
        let bytes = body
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()
            .map_err(|source| AssetError::ReadBody {
                url: url.to_string(),
                source: Box::new(source),
            })?;
        debug!(url, bytes = bytes.len(), "asset_downloaded");
        Ok(bytes)
    }
}

impl AssetProvider for HttpAssetProvider {
    fn fetch_image(&self, url: &str) -> Result<Image, AssetError> {
        let bytes = self.fetch_bytes(url)?;
        decode_image(url, &bytes)
    }

    fn fetch_archive(&self, url: &str) -> Result<Vec<ArchiveEntry>, AssetError> {
        let bytes = self.fetch_bytes(url)?;
        read_archive(url, bytes)
    }
}

/// Reads every file entry of a zip archive; directories are skipped.
pub(crate) fn read_archive(url: &str, bytes: Vec<u8>) -> Result<Vec<ArchiveEntry>, AssetError> {
    let archive_error = |source| AssetError::Archive {
        url: url.to_string(),
        source,
    };
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(archive_error)?;
    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut file = archive.by_index(index).map_err(archive_error)?;
        if file.is_dir() {
            continue;
        }
        let name = file.name().to_string();
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|source| AssetError::ArchiveEntry {
                name: name.clone(),
                source,
            })?;
        entries.push(ArchiveEntry {
            name,
            bytes: contents,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    use super::*;

    fn build_zip(files: &[(&str, &[u8])], dirs: &[&str]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for dir in dirs {
            writer.add_directory(*dir, options).expect("add directory");
        }
        for (name, contents) in files {
            writer.start_file(*name, options).expect("start file");
            writer.write_all(contents).expect("write file");
        }
        writer.finish().expect("finish zip").into_inner()
    }

    #[test]
    fn archive_entries_keep_names_and_contents() {
        let bytes = build_zip(
            &[
                ("50/turnarounds/wizards-7-front.png", b"front"),
                ("50/turnarounds/wizards-7-back.png", b"back"),
            ],
            &["50/", "50/turnarounds/"],
        );

        let entries = read_archive("mem://wizard.zip", bytes).expect("archive");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "50/turnarounds/wizards-7-front.png");
        assert_eq!(entries[0].bytes, b"front");
        assert_eq!(entries[1].bytes, b"back");
    }

    #[test]
    fn corrupt_archive_reports_archive_error() {
        let result = read_archive("mem://broken.zip", b"not a zip at all".to_vec());
        assert!(matches!(result, Err(AssetError::Archive { .. })));
    }

    #[test]
    fn undecodable_image_reports_decode_error_with_name() {
        let error = decode_image("map.png", b"garbage").expect_err("decode should fail");
        assert!(matches!(error, AssetError::Decode { ref name, .. } if name == "map.png"));
    }
}
