// SPDX-License-Identifier: MPL-2.0
//! Fetching image bytes for an [`ImageRef`].
//!
//! References are resolved as follows:
//! - `http://` / `https://`: fetched as is
//! - `file://`: a local file
//! - `/path`: joined with the configured server origin
//! - anything else: a local file path, relative to the working directory

use super::image::{decode, ImageData};
use crate::domain::gallery::ImageRef;
use crate::error::{Error, Result};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

/// Where a reference's bytes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Remote(Url),
    Local(PathBuf),
}

/// Loads images over HTTP or from disk.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    client: reqwest::Client,
    base_url: Url,
}

impl ImageLoader {
    /// Creates a loader resolving relative references against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unparsable base URL and
    /// [`Error::Network`] when the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| Error::Config(format!("invalid base_url {base_url:?}: {err}")))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Resolves a reference to a fetchable location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a URL reference cannot be parsed.
    pub fn resolve(&self, reference: &ImageRef) -> Result<Location> {
        let raw = reference.as_str();
        if reference.is_remote() {
            return Url::parse(raw)
                .map(Location::Remote)
                .map_err(|err| Error::Config(format!("invalid image url {raw:?}: {err}")));
        }
        if raw.starts_with("file://") {
            return Url::parse(raw)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .map(Location::Local)
                .ok_or_else(|| Error::Config(format!("invalid file url {raw:?}")));
        }
        if reference.is_server_relative() {
            return self
                .base_url
                .join(raw)
                .map(Location::Remote)
                .map_err(|err| Error::Config(format!("invalid image path {raw:?}: {err}")));
        }
        Ok(Location::Local(PathBuf::from(raw)))
    }

    /// Fetches and decodes an image.
    ///
    /// # Errors
    ///
    /// Any resolution, transport, HTTP status, I/O, or decode failure.
    pub async fn load(&self, reference: &ImageRef) -> Result<ImageData> {
        let bytes = match self.resolve(reference)? {
            Location::Remote(url) => {
                let response = self.client.get(url).send().await?.error_for_status()?;
                response.bytes().await?.to_vec()
            }
            Location::Local(path) => tokio::fs::read(&path).await?,
        };
        decode(&bytes)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> ImageLoader {
        ImageLoader::new("http://shop.local:8000", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn server_relative_references_join_base() {
        let location = loader().resolve(&"/static/images/placeholder.jpg".into()).unwrap();
        assert_eq!(
            location,
            Location::Remote(Url::parse("http://shop.local:8000/static/images/placeholder.jpg").unwrap())
        );
    }

    #[test]
    fn absolute_urls_are_kept() {
        let location = loader().resolve(&"https://cdn.example/a.png".into()).unwrap();
        assert_eq!(
            location,
            Location::Remote(Url::parse("https://cdn.example/a.png").unwrap())
        );
    }

    #[test]
    fn other_references_are_local_paths() {
        let location = loader().resolve(&"photos/a.png".into()).unwrap();
        assert_eq!(location, Location::Local(PathBuf::from("photos/a.png")));
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let result = ImageLoader::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn file_urls_are_local_paths() {
        let url = Url::from_file_path(std::env::temp_dir().join("a.png")).unwrap();
        let location = loader().resolve(&ImageRef::new(url.to_string())).unwrap();
        assert_eq!(location, Location::Local(std::env::temp_dir().join("a.png")));
    }

    #[tokio::test]
    async fn missing_local_file_is_io_error() {
        let result = loader().load(&"definitely-missing-dir/missing.png".into()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn local_file_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([0, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let url = Url::from_file_path(&path).unwrap();
        let data = loader()
            .load(&ImageRef::new(url.to_string()))
            .await
            .unwrap();
        assert_eq!((data.width, data.height), (2, 2));
    }
}
