use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a finished plagiarism check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Plagiarism percent of the whole text.
    #[serde(deserialize_with = "percent")]
    pub plag_rate: u32,

    /// Sources the text was found in, most similar first.
    #[serde(default)]
    pub sources: Vec<Source>,

    /// HTML rendition of the text with plagiarised fragments highlighted.
    ///
    /// Fragments are wrapped in `span` elements whose classes reference the
    /// index of the matching entry in `sources`.
    #[serde(default)]
    pub html_report: String,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% plagiarism in {} sources", self.plag_rate, self.sources.len())
    }
}

/// A web page some of the checked text was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,

    /// Share of the checked text found in this source, in percent.
    #[serde(alias = "plagrate", deserialize_with = "percent")]
    pub plag_rate: u32,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.url, self.plag_rate)
    }
}

// The service sends percentages both as numbers and as strings.
fn percent<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Percent {
        Number(u32),
        Text(String),
    }

    match Percent::deserialize(deserializer)? {
        Percent::Number(value) => Ok(value),
        Percent::Text(text) => text
            .trim()
            .trim_end_matches('%')
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid percentage: {text:?}"))),
    }
}
