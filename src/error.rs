// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Network(String),
    Http(HttpError),
    Decode(String),
    Image(String),
}

/// Non-success HTTP response returned by the storefront server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    /// Status code of the response.
    pub status: u16,
    /// Request URL, kept for log lines.
    pub url: String,
}

impl HttpError {
    /// Returns the i18n message key used when this error reaches the user.
    pub fn i18n_key(&self) -> &'static str {
        match self.status {
            401 | 403 => "error-http-forbidden",
            404 => "error-http-not-found",
            500..=599 => "error-http-server",
            _ => "error-http-general",
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} for {}", self.status, self.url)
    }
}

impl Error {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Network(_) => "error-network",
            Error::Http(http) => http.i18n_key(),
            Error::Decode(_) => "error-decode",
            Error::Image(_) => "error-image",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Http(e) => write!(f, "Server Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Error::Http(HttpError {
                status: status.as_u16(),
                url: err.url().map(ToString::to_string).unwrap_or_default(),
            });
        }
        if err.is_decode() {
            return Error::Decode(err.to_string());
        }
        Error::Network(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn json_error_becomes_decode_variant() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn http_error_keys_follow_status_class() {
        let key = |status| {
            HttpError {
                status,
                url: "http://localhost/".into(),
            }
            .i18n_key()
        };
        assert_eq!(key(403), "error-http-forbidden");
        assert_eq!(key(404), "error-http-not-found");
        assert_eq!(key(502), "error-http-server");
        assert_eq!(key(418), "error-http-general");
    }

    #[test]
    fn http_error_display_includes_status_and_url() {
        let err = Error::from(HttpError {
            status: 500,
            url: "http://localhost/all-listings/".into(),
        });
        let text = format!("{}", err);
        assert!(text.contains("500"));
        assert!(text.contains("all-listings"));
    }
}
