use percent_encoding::percent_decode_str;
use url::Url;

use super::ObjectKey;

const AWS_DOMAIN_SUFFIX: &str = ".amazonaws.com";

/// Bucket and key of an object written by an external provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObjectLocation {
    pub bucket: String,
    pub key: ObjectKey,
}

impl StoredObjectLocation {
    pub fn new(bucket: impl Into<String>, key: ObjectKey) -> Self {
        Self {
            bucket: bucket.into(),
            key,
        }
    }

    /// Parses a provider-returned object URI.
    ///
    /// Accepted shapes:
    /// - `s3://<bucket>/<key>`
    /// - `https://s3[.<region>].amazonaws.com/<bucket>/<key>` (path style)
    /// - `https://<bucket>.s3[.<region>].amazonaws.com/<key>` (virtual hosted)
    pub fn parse_uri(uri: &str) -> Result<Self, LocationParseError> {
        let url = Url::parse(uri).map_err(|e| LocationParseError::InvalidUri(e.to_string()))?;
        if !matches!(url.scheme(), "s3" | "http" | "https") {
            return Err(LocationParseError::UnsupportedScheme(
                url.scheme().to_string(),
            ));
        }
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or(LocationParseError::MissingBucket)?;

        if url.scheme() == "s3" {
            return Self::from_bucket_and_path(host, url.path());
        }

        if !host.ends_with(AWS_DOMAIN_SUFFIX) {
            return Err(LocationParseError::UnsupportedHost(host.to_string()));
        }
        if is_regional_endpoint(host) {
            let path = url.path().trim_start_matches('/');
            let (bucket, key) = path.split_once('/').unwrap_or((path, ""));
            if bucket.is_empty() {
                return Err(LocationParseError::MissingBucket);
            }
            Self::from_bucket_and_path(bucket, key)
        } else {
            let bucket = virtual_hosted_bucket(host)
                .ok_or_else(|| LocationParseError::UnsupportedHost(host.to_string()))?;
            Self::from_bucket_and_path(bucket, url.path())
        }
    }

    /// `path` is still percent-encoded; the returned key is not.
    fn from_bucket_and_path(bucket: &str, path: &str) -> Result<Self, LocationParseError> {
        let key = percent_decode_str(path.trim_start_matches('/'))
            .decode_utf8()
            .map_err(|e| LocationParseError::InvalidUri(e.to_string()))?;
        if key.is_empty() || key.ends_with('/') {
            return Err(LocationParseError::MissingKey);
        }
        Ok(Self::new(bucket, ObjectKey::from_raw(key.into_owned())))
    }
}

/// `s3.amazonaws.com`, `s3.<region>.amazonaws.com` or `s3-<region>.amazonaws.com`.
fn is_regional_endpoint(host: &str) -> bool {
    host.starts_with("s3.") || host.starts_with("s3-")
}

/// Extracts `<bucket>` from `<bucket>.s3[.-<region>].amazonaws.com`.
fn virtual_hosted_bucket(host: &str) -> Option<&str> {
    let idx = host.find(".s3.").or_else(|| host.find(".s3-"))?;
    let bucket = &host[..idx];
    (!bucket.is_empty()).then_some(bucket)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationParseError {
    #[error("invalid uri: {0}")]
    InvalidUri(String),
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
    #[error("unsupported host: {0}")]
    UnsupportedHost(String),
    #[error("uri has no bucket")]
    MissingBucket,
    #[error("uri has no object key")]
    MissingKey,
}
