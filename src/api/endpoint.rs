use http::Method;
use url::Url;

use crate::{PlagtrackerError, PlagtrackerResult};

/// Version of the API path layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiVersion {
    /// `https://<domain>/api/v1/...`
    #[default]
    V1,
    /// `https://<domain>/api/...`
    Legacy,
}

impl ApiVersion {
    fn root_segments(self) -> &'static [&'static str] {
        match self {
            ApiVersion::V1 => &["api", "v1"],
            ApiVersion::Legacy => &["api"],
        }
    }
}

/// A remote operation of the Plagtracker API.
///
/// Variants that refer to an already submitted text carry its hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    SubmitText,
    SubmitUrl,
    SubmitFile,
    TextStatus(&'a str),
    Result(&'a str),
    PlagiarismPercent(&'a str),
    Text(&'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::SubmitText | Endpoint::SubmitUrl | Endpoint::SubmitFile => Method::POST,
            _ => Method::GET,
        }
    }

    // A trailing empty segment renders as a trailing slash.
    fn segments(&self) -> PlagtrackerResult<Vec<&str>> {
        let segments = match *self {
            Endpoint::SubmitText => vec!["text"],
            Endpoint::SubmitUrl => vec!["url"],
            Endpoint::SubmitFile => vec!["file"],
            Endpoint::TextStatus(hash) => vec!["text", checked_hash(hash)?, "status", ""],
            Endpoint::Result(hash) => vec!["text", checked_hash(hash)?, "result", ""],
            Endpoint::PlagiarismPercent(hash) => {
                vec!["text", checked_hash(hash)?, "plagiarism-percent", ""]
            }
            Endpoint::Text(hash) => vec!["text", checked_hash(hash)?],
        };
        Ok(segments)
    }

    /// Builds the full URL of this endpoint below `base`.
    ///
    /// Any path already present on `base` is kept as a prefix. The hash is
    /// percent-encoded as a single path segment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHash` for an empty, `.` or `..` hash, and `ConfigurationError` if
    /// `base` cannot carry a path.
    pub fn url(&self, base: &Url, version: ApiVersion) -> PlagtrackerResult<Url> {
        let segments = self.segments()?;

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| {
                PlagtrackerError::ConfigurationError(format!("Base URL cannot carry a path: {base}"))
            })?
            .pop_if_empty()
            .extend(version.root_segments())
            .extend(segments);

        Ok(url)
    }
}

// "." and ".." would be collapsed out of the path by URL normalization.
fn checked_hash(hash: &str) -> PlagtrackerResult<&str> {
    let trimmed = hash.trim();
    if matches!(trimmed, "" | "." | "..") {
        return Err(PlagtrackerError::InvalidHash(hash.to_string()));
    }
    Ok(trimmed)
}
